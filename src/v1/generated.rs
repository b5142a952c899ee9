include!("generated/concordium.rs");
