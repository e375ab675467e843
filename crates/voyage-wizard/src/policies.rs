//! Policies tab

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WizardError;
use crate::field::{FieldStore, FieldValue};
use crate::tab::TabId;
use crate::Result;

const FIELDS: &[&str] = &[
    "terms_conditions",
    "privacy_policy",
    "payment_terms",
    "custom_policies",
];

const TERMS_TEMPLATE: &str = "1. BOOKING CONFIRMATION
- All bookings are subject to availability and confirmation
- A booking confirmation will be sent via email within 24 hours

2. CANCELLATION POLICY
- Cancellations made 30+ days before departure: 10% penalty
- Cancellations made 15-29 days before departure: 25% penalty
- Cancellations made 7-14 days before departure: 50% penalty
- Cancellations made less than 7 days: 100% penalty

3. PAYMENT TERMS
- 25% advance payment required at the time of booking
- Balance payment must be completed 15 days before departure

4. TRAVEL DOCUMENTS
- Valid passport/ID required for all travelers
- Guests responsible for obtaining necessary visas

5. LIABILITY
- Company not liable for delays due to weather, political situations, or natural disasters";

const PRIVACY_TEMPLATE: &str = "1. INFORMATION COLLECTION
We collect personal information including name, contact details and travel preferences to process your booking.

2. USE OF INFORMATION
- Process and confirm bookings
- Communicate important travel updates
- Provide customer support

3. INFORMATION SHARING
We do not sell your personal information. It is shared only with travel service providers, for legal requirements, or with your consent.

4. YOUR RIGHTS
You may access, correct or request deletion of your data at any time by contacting our support team.";

const PAYMENT_TEMPLATE: &str = "1. PAYMENT METHODS
- Credit/Debit Cards
- Bank Transfer
- Digital Wallets

2. PAYMENT SCHEDULE
- Booking Amount: 25% of total package cost at confirmation
- Balance Payment: 75% due 15 days before departure
- Last-minute bookings: Full payment required immediately

3. CURRENCY
All prices are quoted in Indian Rupees (INR) unless otherwise specified.

4. REFUND POLICY
Refunds follow the cancellation policy and may take 7-14 business days.

5. FAILED PAYMENTS
Bookings with failed payments are cancelled after 24 hours unless payment is received.";

/// The three mandatory policy texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyField {
    TermsConditions,
    PrivacyPolicy,
    PaymentTerms,
}

impl PolicyField {
    pub fn template(&self) -> &'static str {
        match self {
            PolicyField::TermsConditions => TERMS_TEMPLATE,
            PolicyField::PrivacyPolicy => PRIVACY_TEMPLATE,
            PolicyField::PaymentTerms => PAYMENT_TEMPLATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPolicy {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policies {
    pub terms_conditions: String,
    pub privacy_policy: String,
    pub payment_terms: String,
    #[serde(default)]
    pub custom_policies: Vec<CustomPolicy>,
}

impl Policies {
    fn text_mut(&mut self, field: PolicyField) -> &mut String {
        match field {
            PolicyField::TermsConditions => &mut self.terms_conditions,
            PolicyField::PrivacyPolicy => &mut self.privacy_policy,
            PolicyField::PaymentTerms => &mut self.payment_terms,
        }
    }

    /// Replace a policy text with the built-in template
    pub fn load_template(&mut self, field: PolicyField) {
        *self.text_mut(field) = field.template().to_string();
    }

    pub fn add_custom_policy(&mut self) -> String {
        let id = format!("policy-{}", Uuid::new_v4().simple());
        self.custom_policies.push(CustomPolicy {
            id: id.clone(),
            title: String::new(),
            content: String::new(),
        });
        id
    }

    pub fn update_custom_policy(
        &mut self,
        policy_id: &str,
        field: &str,
        value: FieldValue,
    ) -> Result<()> {
        let policy = self
            .custom_policies
            .iter_mut()
            .find(|p| p.id == policy_id)
            .ok_or_else(|| WizardError::ItemNotFound(format!("policy {}", policy_id)))?;
        match field {
            "title" => policy.title = value.as_text(),
            "content" => policy.content = value.as_text(),
            _ => {
                return Err(WizardError::UnknownField {
                    tab: TabId::Policies,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }

    pub fn remove_custom_policy(&mut self, policy_id: &str) -> bool {
        let before = self.custom_policies.len();
        self.custom_policies.retain(|p| p.id != policy_id);
        self.custom_policies.len() != before
    }
}

impl FieldStore for Policies {
    fn field_names(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> FieldValue {
        match name {
            "terms_conditions" => self.terms_conditions.as_str().into(),
            "privacy_policy" => self.privacy_policy.as_str().into(),
            "payment_terms" => self.payment_terms.as_str().into(),
            "custom_policies" => FieldValue::encode(&self.custom_policies),
            _ => FieldValue::Null,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        match name {
            "terms_conditions" => self.terms_conditions = value.as_text(),
            "privacy_policy" => self.privacy_policy = value.as_text(),
            "payment_terms" => self.payment_terms = value.as_text(),
            "custom_policies" => {
                self.custom_policies = if value.is_null() {
                    Vec::new()
                } else {
                    value.decode(name)?
                };
            }
            _ => {
                return Err(WizardError::UnknownField {
                    tab: TabId::Policies,
                    field: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_templates() {
        let mut policies = Policies::default();
        policies.load_template(PolicyField::TermsConditions);
        policies.load_template(PolicyField::PaymentTerms);

        assert!(policies.terms_conditions.starts_with("1. BOOKING CONFIRMATION"));
        assert!(policies.payment_terms.contains("INR"));
        assert!(policies.privacy_policy.is_empty());
    }

    #[test]
    fn test_custom_policies() {
        let mut policies = Policies::default();
        let id = policies.add_custom_policy();
        policies
            .update_custom_policy(&id, "title", "Pet policy".into())
            .unwrap();
        assert_eq!(policies.custom_policies[0].title, "Pet policy");
        assert!(matches!(
            policies.update_custom_policy("policy-x", "title", "x".into()),
            Err(WizardError::ItemNotFound(_))
        ));
        assert!(policies.remove_custom_policy(&id));
    }
}
