//! Orden de recogida (`CreatePickupOrders`)

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::address::Sender;
use crate::models::order::SendTimeWindow;
use crate::utils::errors::PplResult;
use crate::utils::validation::{check_email, check_max_length, check_positive, check_required};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickupOrder {
    order_reference_id: String,
    customer_reference: Option<String>,
    count_packages: u32,
    note: Option<String>,
    email: Option<String>,
    send_date: NaiveDate,
    send_time: Option<SendTimeWindow>,
    sender: Sender,
}

impl PickupOrder {
    pub fn new(
        order_reference_id: impl Into<String>,
        count_packages: u32,
        send_date: NaiveDate,
        sender: Sender,
    ) -> PplResult<Self> {
        let order_reference_id = order_reference_id.into();

        check_required("order_reference_id", &order_reference_id, 100)?;
        check_positive("count_packages", count_packages)?;

        Ok(Self {
            order_reference_id,
            customer_reference: None,
            count_packages,
            note: None,
            email: None,
            send_date,
            send_time: None,
            sender,
        })
    }

    pub fn set_customer_reference(&mut self, customer_reference: Option<String>) -> PplResult<()> {
        check_max_length("customer_reference", customer_reference.as_deref(), 40)?;
        self.customer_reference = customer_reference;
        Ok(())
    }

    pub fn set_note(&mut self, note: Option<String>) -> PplResult<()> {
        check_max_length("note", note.as_deref(), 300)?;
        self.note = note;
        Ok(())
    }

    pub fn set_email(&mut self, email: Option<String>) -> PplResult<()> {
        check_email("email", email.as_deref(), 100)?;
        self.email = email;
        Ok(())
    }

    pub fn with_customer_reference(mut self, customer_reference: impl Into<String>) -> PplResult<Self> {
        self.set_customer_reference(Some(customer_reference.into()))?;
        Ok(self)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> PplResult<Self> {
        self.set_note(Some(note.into()))?;
        Ok(self)
    }

    pub fn with_email(mut self, email: impl Into<String>) -> PplResult<Self> {
        self.set_email(Some(email.into()))?;
        Ok(self)
    }

    pub fn with_send_time(mut self, send_time: SendTimeWindow) -> Self {
        self.send_time = Some(send_time);
        self
    }

    pub fn order_reference_id(&self) -> &str {
        &self.order_reference_id
    }

    pub fn customer_reference(&self) -> Option<&str> {
        self.customer_reference.as_deref()
    }

    pub fn count_packages(&self) -> u32 {
        self.count_packages
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn send_date(&self) -> NaiveDate {
        self.send_date
    }

    pub fn send_time(&self) -> Option<&SendTimeWindow> {
        self.send_time.as_ref()
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }
}
