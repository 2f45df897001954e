use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum PayoutMethod {
    #[default]
    BankTransfer,
    Paypal,
}

impl Display for PayoutMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let method = match self {
            PayoutMethod::BankTransfer => "bank_transfer",
            PayoutMethod::Paypal => "paypal",
        };
        write!(f, "{}", method)
    }
}

impl PayoutMethod {
    pub fn from_str(value: &str) -> Self {
        match value {
            "bank_transfer" => PayoutMethod::BankTransfer,
            "paypal" => PayoutMethod::Paypal,
            _ => PayoutMethod::BankTransfer,
        }
    }
}
