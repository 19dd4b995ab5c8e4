use serde::Serialize;

use super::common::Params;

/// Body of `order/place`.
#[derive(Clone, Debug, Serialize)]
pub struct PlaceOrder {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub shipping_method_id: i64,
    pub payment_method_id: i64,
    pub spot_id: i64,
    /// Delivery address, for courier shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Number of chopstick sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticks: Option<i64>,
    /// Banknote the customer pays with, so the courier brings change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
}

impl Params for PlaceOrder {}

impl PlaceOrder {
    pub fn new(phone: &str, shipping_method_id: i64, payment_method_id: i64, spot_id: i64) -> Self {
        Self {
            phone: phone.to_string(),
            firstname: None,
            lastname: None,
            email: None,
            shipping_method_id,
            payment_method_id,
            spot_id,
            address: None,
            comment: None,
            sticks: None,
            change: None,
        }
    }

    pub fn with_firstname(mut self, firstname: &str) -> Self {
        self.firstname = Some(firstname.to_string());
        self
    }

    pub fn with_lastname(mut self, lastname: &str) -> Self {
        self.lastname = Some(lastname.to_string());
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn with_sticks(mut self, sticks: i64) -> Self {
        self.sticks = Some(sticks);
        self
    }

    pub fn with_change(mut self, change: &str) -> Self {
        self.change = Some(change.to_string());
        self
    }
}
