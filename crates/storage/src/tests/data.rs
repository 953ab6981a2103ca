#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use std::sync::LazyLock;

use rust_decimal::Decimal;
use stockroom_domain as domain;

pub static ADMIN: LazyLock<domain::Session> = LazyLock::new(|| domain::Session {
    name: domain::Name::new("Ravi Kumar").unwrap(),
    email: domain::Email::new("ravi@example.com").unwrap(),
    role: domain::Role::Admin,
});

pub static STORE_MANAGER: LazyLock<domain::Session> = LazyLock::new(|| domain::Session {
    name: domain::Name::new("Asha Rao").unwrap(),
    email: domain::Email::new("asha@example.com").unwrap(),
    role: domain::Role::StoreManager,
});

pub static CREDENTIALS: LazyLock<domain::Credentials> =
    LazyLock::new(|| domain::Credentials::new("ravi@example.com", "secret1").unwrap());

pub static REGISTRATION: LazyLock<domain::Registration> = LazyLock::new(|| {
    domain::SignUpForm {
        full_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
        role: "Store Manager".to_string(),
        location: Some("Pune".to_string()),
        department: None,
        phone_number: Some("9876543210".to_string()),
    }
    .validate()
    .unwrap()
});

pub static PRODUCTS: LazyLock<Vec<domain::Product>> =
    LazyLock::new(|| vec![BAT.clone(), BALL.clone()]);

pub static BAT: LazyLock<domain::Product> = LazyLock::new(|| domain::Product {
    id: 1.into(),
    name: domain::Name::new("Cricket Bat").unwrap(),
    price: domain::Price::new(Decimal::from(1200)).unwrap(),
    image_url: None,
    category: None,
    stock: Some(12),
    description: None,
});

pub static BALL: LazyLock<domain::Product> = LazyLock::new(|| domain::Product {
    id: 2.into(),
    name: domain::Name::new("Tennis Ball").unwrap(),
    price: domain::Price::new(Decimal::from(80)).unwrap(),
    image_url: Some("https://img.example.com/ball.png".to_string()),
    category: None,
    stock: None,
    description: None,
});
