//! Orden de envío (`CreateOrders`)

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::enums::Product;
use crate::models::address::{Recipient, Sender};
use crate::utils::errors::{validation_error, PplResult};
use crate::utils::validation::{check_email, check_max_length, check_positive, check_required};

/// Ventana horaria de recogida (fecha y hora combinadas)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SendTimeWindow {
    from: DateTime<FixedOffset>,
    to: DateTime<FixedOffset>,
}

impl SendTimeWindow {
    pub fn new(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> PplResult<Self> {
        if to < from {
            return Err(validation_error(
                "send_time_to",
                "range",
                "send_time_to must not precede send_time_from",
            ));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> DateTime<FixedOffset> {
        self.from
    }

    pub fn to(&self) -> DateTime<FixedOffset> {
        self.to
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    count_packages: u32,
    order_reference_id: String,
    product: Product,
    send_date: DateTime<FixedOffset>,
    send_time: Option<SendTimeWindow>,
    sender: Sender,
    recipient: Recipient,
    customer_reference: Option<String>,
    email: Option<String>,
    note: Option<String>,
}

impl Order {
    pub fn new(
        count_packages: u32,
        order_reference_id: impl Into<String>,
        product: Product,
        send_date: DateTime<FixedOffset>,
        sender: Sender,
        recipient: Recipient,
    ) -> PplResult<Self> {
        let mut order = Self {
            count_packages: 0,
            order_reference_id: String::new(),
            product,
            send_date,
            send_time: None,
            sender,
            recipient,
            customer_reference: None,
            email: None,
            note: None,
        };
        order.set_count_packages(count_packages)?;
        order.set_order_reference_id(order_reference_id)?;
        Ok(order)
    }

    pub fn set_count_packages(&mut self, count_packages: u32) -> PplResult<()> {
        check_positive("count_packages", count_packages)?;
        self.count_packages = count_packages;
        Ok(())
    }

    pub fn set_order_reference_id(&mut self, order_reference_id: impl Into<String>) -> PplResult<()> {
        let order_reference_id = order_reference_id.into();
        check_required("order_reference_id", &order_reference_id, 100)?;
        self.order_reference_id = order_reference_id;
        Ok(())
    }

    pub fn set_customer_reference(&mut self, customer_reference: Option<String>) -> PplResult<()> {
        check_max_length("customer_reference", customer_reference.as_deref(), 40)?;
        self.customer_reference = customer_reference;
        Ok(())
    }

    pub fn set_email(&mut self, email: Option<String>) -> PplResult<()> {
        check_email("email", email.as_deref(), 100)?;
        self.email = email;
        Ok(())
    }

    pub fn set_note(&mut self, note: Option<String>) -> PplResult<()> {
        check_max_length("note", note.as_deref(), 300)?;
        self.note = note;
        Ok(())
    }

    pub fn set_send_time(&mut self, send_time: Option<SendTimeWindow>) {
        self.send_time = send_time;
    }

    pub fn with_customer_reference(mut self, customer_reference: impl Into<String>) -> PplResult<Self> {
        self.set_customer_reference(Some(customer_reference.into()))?;
        Ok(self)
    }

    pub fn with_email(mut self, email: impl Into<String>) -> PplResult<Self> {
        self.set_email(Some(email.into()))?;
        Ok(self)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> PplResult<Self> {
        self.set_note(Some(note.into()))?;
        Ok(self)
    }

    pub fn with_send_time(mut self, send_time: SendTimeWindow) -> Self {
        self.send_time = Some(send_time);
        self
    }

    pub fn count_packages(&self) -> u32 {
        self.count_packages
    }

    pub fn order_reference_id(&self) -> &str {
        &self.order_reference_id
    }

    pub fn product(&self) -> Product {
        self.product
    }

    pub fn send_date(&self) -> DateTime<FixedOffset> {
        self.send_date
    }

    pub fn send_time(&self) -> Option<&SendTimeWindow> {
        self.send_time.as_ref()
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn customer_reference(&self) -> Option<&str> {
        self.customer_reference.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Country;

    fn send_date() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-01T08:00:00+01:00").unwrap()
    }

    fn order() -> Order {
        let sender = Sender::new("Eshop s.r.o.", "Dlouhá 12", "Praha", "11000", Country::CZ).unwrap();
        let recipient = Recipient::new("Jan Novák", "Krátká 3", "Brno", "60200", Country::CZ).unwrap();
        Order::new(1, "OBJ-2024-001", Product::PplParcelCzPrivate, send_date(), sender, recipient)
            .unwrap()
    }

    #[test]
    fn test_count_packages_must_be_positive() {
        let mut order = order();
        assert!(order.set_count_packages(0).unwrap_err().is_validation_of("count_packages"));
        assert_eq!(order.count_packages(), 1);
    }

    #[test]
    fn test_email_round_trip() {
        let mut order = order();
        order.set_email(Some("jan.novak@example.cz".to_string())).unwrap();
        assert_eq!(order.email(), Some("jan.novak@example.cz"));

        for invalid in ["plainaddress", "@example.cz", "jan@", "jan novak@example.cz"] {
            let error = order.set_email(Some(invalid.to_string())).unwrap_err();
            assert!(error.is_validation_of("email"), "{invalid} should be rejected");
        }
        // un email inválido no pisa el anterior
        assert_eq!(order.email(), Some("jan.novak@example.cz"));
    }

    #[test]
    fn test_customer_reference_boundary() {
        let mut order = order();
        assert!(order.set_customer_reference(Some("R".repeat(40))).is_ok());
        assert!(order
            .set_customer_reference(Some("R".repeat(41)))
            .unwrap_err()
            .is_validation_of("customer_reference"));
    }

    #[test]
    fn test_note_and_reference_limits() {
        let mut order = order();
        assert!(order.set_note(Some("n".repeat(300))).is_ok());
        assert!(order.set_note(Some("n".repeat(301))).is_err());
        assert!(order.set_order_reference_id("o".repeat(101)).is_err());
    }

    #[test]
    fn test_send_time_window_order() {
        let from = send_date();
        let to = DateTime::parse_from_rfc3339("2024-03-01T16:00:00+01:00").unwrap();
        assert!(SendTimeWindow::new(from, to).is_ok());
        assert!(SendTimeWindow::new(to, from).unwrap_err().is_validation_of("send_time_to"));
    }
}
