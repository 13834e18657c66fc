//! Checkout form: contact fields, autosaved draft and the consent gate in
//! front of the final confirmation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, StorageError, ValidationError};
use crate::storage::{keys, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Card,
    Cash,
    Transfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Cash, PaymentMethod::Transfer];

    /// Code the backend expects
    pub fn code(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Transfer => "Transfer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Tarjeta de crédito / débito",
            PaymentMethod::Cash => "Efectivo en el hotel",
            PaymentMethod::Transfer => "Transferencia bancaria",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.code() == code)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Countries pinned at the top of the dropdown
pub const FAVOURITE_COUNTRIES: [&str; 2] = ["Estados Unidos", "Japan"];

pub const COUNTRIES: [&str; 20] = [
    "Afghanistan", "Albania", "Algeria", "Andorra", "Angola", "Argentina", "Australia",
    "Brazil", "Canada", "Chile", "China", "Colombia", "Ecuador", "France", "Germany",
    "Italy", "Mexico", "Spain", "United Kingdom", "Venezuela",
];

/// Checkout fields. Serialized as-is into the `checkout_draft` key so a
/// reload does not lose what the guest typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckoutForm {
    pub names: String,
    pub surnames: String,
    pub email: String,
    pub phone: String,
    pub mobile_phone: String,
    pub address: String,
    pub address2: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub payment_method: Option<PaymentMethod>,
    pub observations: String,
}

/// Validated contact details
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub phone: String,
    pub mobile_phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub observations: String,
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Phone, address, city, postal code and country are mandatory.
    /// Payment defaults to card when nothing was picked.
    pub fn validate(&self) -> Result<ContactDetails, ValidationError> {
        let required = [&self.phone, &self.address, &self.city, &self.postal_code, &self.country];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ValidationError::MissingCheckoutFields);
        }
        Ok(ContactDetails {
            phone: self.phone.trim().to_string(),
            mobile_phone: self.mobile_phone.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            country: self.country.trim().to_string(),
            observations: self.observations.trim().to_string(),
            payment_method: self.payment_method.unwrap_or(PaymentMethod::Card),
        })
    }

    /// Fill contact fields from the guest profile without touching address fields
    pub fn prefill(&mut self, profile: &crate::GuestProfile) {
        let take = |value: &Option<String>| value.clone().unwrap_or_default();
        self.names = take(&profile.names);
        self.surnames = take(&profile.surnames);
        self.email = take(&profile.email);
        self.phone = take(&profile.phone);
        self.mobile_phone = take(&profile.mobile_phone);
    }
}

/// Session-storage persistence of the checkout form
pub struct CheckoutDraft;

impl CheckoutDraft {
    /// Restore the saved form, or an empty one when none is stored or it is unreadable
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> CheckoutForm {
        let Some(raw) = store.get(keys::CHECKOUT_DRAFT) else {
            return CheckoutForm::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("discarding unreadable checkout draft: {}", e);
            CheckoutForm::default()
        })
    }

    pub fn save<S: SessionStore + ?Sized>(store: &S, form: &CheckoutForm) -> Result<(), StorageError> {
        let json = serde_json::to_string(form).map_err(|e| StorageError::Malformed {
            key: keys::CHECKOUT_DRAFT.to_string(),
            reason: e.to_string(),
        })?;
        store.set(keys::CHECKOUT_DRAFT, &json)
    }

    pub fn clear<S: SessionStore + ?Sized>(store: &S) -> Result<(), StorageError> {
        store.remove(keys::CHECKOUT_DRAFT)
    }
}

/// The two consent checkboxes in front of "confirm booking"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcknowledgementGate {
    pub details_confirmed: bool,
    pub conditions_accepted: bool,
}

impl AcknowledgementGate {
    pub fn set_details(&mut self, checked: bool) {
        self.details_confirmed = checked;
    }

    pub fn set_conditions(&mut self, checked: bool) {
        self.conditions_accepted = checked;
    }

    pub fn can_submit(&self) -> bool {
        self.details_confirmed && self.conditions_accepted
    }

    pub fn require(&self) -> Result<(), BookingError> {
        if self.can_submit() {
            Ok(())
        } else {
            Err(BookingError::AcknowledgementsMissing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySessionStore;
    use crate::GuestProfile;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            phone: "600111222".to_string(),
            address: "Shijo-dori 12".to_string(),
            city: "Kyoto".to_string(),
            postal_code: "600-8216".to_string(),
            country: "Japan".to_string(),
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_validate_requires_address_block() {
        assert!(filled_form().validate().is_ok());
        let mut form = filled_form();
        form.postal_code = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingCheckoutFields));
    }

    #[test]
    fn test_payment_defaults_to_card() {
        let details = filled_form().validate().unwrap();
        assert_eq!(details.payment_method, PaymentMethod::Card);
        let mut form = filled_form();
        form.payment_method = Some(PaymentMethod::Transfer);
        assert_eq!(form.validate().unwrap().payment_method.code(), "Transfer");
    }

    #[test]
    fn test_draft_survives_reload() {
        let store = MemorySessionStore::new();
        let mut form = filled_form();
        form.observations = "Late arrival".to_string();
        form.payment_method = Some(PaymentMethod::Cash);
        CheckoutDraft::save(&store, &form).unwrap();
        assert_eq!(CheckoutDraft::load(&store), form);

        CheckoutDraft::clear(&store).unwrap();
        assert_eq!(CheckoutDraft::load(&store), CheckoutForm::default());
    }

    #[test]
    fn test_corrupt_draft_is_ignored() {
        let store = MemorySessionStore::new();
        store.set(keys::CHECKOUT_DRAFT, "{not json").unwrap();
        assert_eq!(CheckoutDraft::load(&store), CheckoutForm::default());
        // partial drafts fill in defaults
        store.set(keys::CHECKOUT_DRAFT, r#"{"city":"Osaka"}"#).unwrap();
        assert_eq!(CheckoutDraft::load(&store).city, "Osaka");
    }

    #[test]
    fn test_prefill_keeps_address() {
        let mut form = filled_form();
        form.prefill(&GuestProfile {
            names: Some("Kenji".to_string()),
            surnames: None,
            phone: Some("700".to_string()),
            email: Some("kenji@example.com".to_string()),
            mobile_phone: None,
        });
        assert_eq!(form.names, "Kenji");
        assert_eq!(form.phone, "700");
        assert_eq!(form.address, "Shijo-dori 12");
    }

    #[test]
    fn test_acknowledgement_gate() {
        let mut gate = AcknowledgementGate::default();
        assert!(!gate.can_submit());
        gate.set_details(true);
        assert_eq!(gate.require(), Err(BookingError::AcknowledgementsMissing));
        gate.set_conditions(true);
        assert!(gate.can_submit());
        gate.set_details(false);
        assert!(!gate.can_submit());
    }

    #[test]
    fn test_payment_codes_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_code(method.code()), Some(method));
        }
        assert_eq!(PaymentMethod::from_code("Bitcoin"), None);
    }
}
