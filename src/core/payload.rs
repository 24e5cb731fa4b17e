use crate::domain::model::{
    ContactSection, LeadSection, LoanSection, NormalizedRecord, PropertySection, WebhookPayload,
};
use crate::utils::error::{LeadError, Result};

/// Assembles the webhook payload for one normalized record.
///
/// Primary phone is the first non-empty slot in `phone`, `phone2`, `phone3`
/// order; the remaining non-empty slot values become alternates (values equal
/// to the primary are dropped, at most two carried). Fails when the record
/// has neither an email nor any usable phone.
pub fn build(record: &NormalizedRecord) -> Result<WebhookPayload> {
    let slots = [&record.phone, &record.phone2, &record.phone3];

    let primary_phone = slots
        .iter()
        .find(|phone| !phone.is_empty())
        .map(|phone| phone.to_string())
        .unwrap_or_default();

    let mut alt_phones = slots
        .iter()
        .copied()
        .filter(|phone| !phone.is_empty() && phone.as_str() != primary_phone)
        .cloned();
    let alt_phone_1 = alt_phones.next();
    let alt_phone_2 = alt_phones.next();

    if record.email.is_empty() && primary_phone.is_empty() {
        return Err(LeadError::ValidationError {
            message: "Either email or phone is required".to_string(),
        });
    }

    Ok(WebhookPayload {
        contact: ContactSection {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            primary_phone,
            alt_phone_1,
            alt_phone_2,
        },
        property: PropertySection {
            street_address: record.address.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            zip: record.zip.clone(),
            value: record.property_value,
            description: record.property_description.clone(),
            purpose: record.property_purpose.clone(),
        },
        loan: LoanSection {
            credit_score: record.credit_score,
            current_balance: record.mortgage_balance,
            current_rate: record.mortgage_rate,
            second_mortgage: record.second_mortgage.clone(),
            second_balance: record.second_balance,
            second_rate: record.second_rate,
            additional_cash: record.additional_cash,
            cash_out: record.cash_out,
            loan_purpose: record.loan_purpose.clone(),
            found_home: record.found_home,
            down_payment: record.down_payment,
            ltv: record.ltv,
            bid_loan_value: record.bid_loan_value,
            va_eligible: record.va_eligible,
        },
        lead: LeadSection {
            source: record.lead_source.clone(),
            original_id: record.lead_id.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fails_without_contact_info() {
        let record = NormalizedRecord::default();
        let err = build(&record).unwrap_err();
        assert!(matches!(err, LeadError::ValidationError { .. }));
        assert!(err.to_string().contains("Either email or phone is required"));
    }

    #[test]
    fn test_build_with_only_secondary_phone() {
        let record = NormalizedRecord {
            phone2: "5551234567".to_string(),
            ..Default::default()
        };
        let payload = build(&record).unwrap();
        assert_eq!(payload.contact.primary_phone, "5551234567");
        assert_eq!(payload.contact.alt_phone_1, None);
        assert_eq!(payload.contact.alt_phone_2, None);
    }

    #[test]
    fn test_build_with_email_only() {
        let record = NormalizedRecord {
            email: "a@b.com".to_string(),
            ..Default::default()
        };
        let payload = build(&record).unwrap();
        assert_eq!(payload.contact.email, "a@b.com");
        assert_eq!(payload.contact.primary_phone, "");
        assert_eq!(payload.contact.alt_phone_1, None);
    }

    #[test]
    fn test_build_alternates_in_slot_order() {
        let record = NormalizedRecord {
            phone: "5551111111".to_string(),
            phone2: "5552222222".to_string(),
            phone3: "5553333333".to_string(),
            ..Default::default()
        };
        let payload = build(&record).unwrap();
        assert_eq!(payload.contact.primary_phone, "5551111111");
        assert_eq!(payload.contact.alt_phone_1.as_deref(), Some("5552222222"));
        assert_eq!(payload.contact.alt_phone_2.as_deref(), Some("5553333333"));
    }

    #[test]
    fn test_build_drops_alternates_equal_to_primary() {
        let record = NormalizedRecord {
            phone: "5551111111".to_string(),
            phone2: "5551111111".to_string(),
            phone3: "5553333333".to_string(),
            ..Default::default()
        };
        let payload = build(&record).unwrap();
        assert_eq!(payload.contact.alt_phone_1.as_deref(), Some("5553333333"));
        assert_eq!(payload.contact.alt_phone_2, None);
    }

    #[test]
    fn test_build_copies_sections() {
        let record = NormalizedRecord {
            first_name: "John".to_string(),
            email: "john@x.com".to_string(),
            address: "123 Main St".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            zip: "98101".to_string(),
            property_value: 350000.0,
            credit_score: 712.0,
            mortgage_balance: 210000.0,
            cash_out: true,
            lead_id: "L-42".to_string(),
            lead_source: "Refi".to_string(),
            ..Default::default()
        };
        let payload = build(&record).unwrap();
        assert_eq!(payload.property.street_address, "123 Main St");
        assert_eq!(payload.property.value, 350000.0);
        assert_eq!(payload.loan.credit_score, 712.0);
        assert_eq!(payload.loan.current_balance, 210000.0);
        assert!(payload.loan.cash_out);
        assert_eq!(payload.lead.original_id, "L-42");
        assert_eq!(payload.lead.source, "Refi");
    }

    #[test]
    fn test_payload_serializes_null_alt_slots() {
        let record = NormalizedRecord {
            phone: "5551234567".to_string(),
            ..Default::default()
        };
        let payload = build(&record).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["contact"]["alt_phone_1"].is_null());
        assert!(json["contact"]["alt_phone_2"].is_null());
    }
}
