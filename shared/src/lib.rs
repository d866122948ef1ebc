use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page size used by every list screen.
pub const PAGE_LIMIT: u32 = 10;

/// Number of pages needed to show `total` items at `limit` per page.
pub fn page_count(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    ((total + limit as u64 - 1) / limit as u64) as u32
}

/// Primary contact block nested inside a restaurant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryContactDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
}

/// A restaurant record as returned by the backend. List responses may carry
/// partial records, so every non-identity field tolerates absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub restaurant_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub llc: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub primary_contact_details: Option<PrimaryContactDetails>,
    #[serde(default)]
    pub agreement_accepted: bool,
    #[serde(default)]
    pub is_accepted: bool,
}

/// Mutation body for add/edit restaurant. The contact sub-fields are always
/// nested and `isAccepted` is always sent as `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPayload {
    pub restaurant_name: String,
    pub address: String,
    pub llc: String,
    pub phone_number: String,
    pub email: String,
    pub owner_name: String,
    pub password: String,
    pub primary_contact_details: PrimaryContactDetails,
    pub agreement_accepted: bool,
    pub is_accepted: bool,
}

/// A customer record. `points` is the reward balance and is never edited
/// directly; it only changes through the reward sub-flow on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub points: i64,
    /// RFC 3339 registration timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl Customer {
    /// Registration date as shown in the table, `DD/MM/YYYY`. Falls back to
    /// the raw string when the timestamp does not parse.
    pub fn registered_on(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(dt) => dt.format("%d/%m/%Y").to_string(),
            Err(_) => self.created_at.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Mutation body for add/edit customer. `restaurantId` is attached on
/// create only; edit bodies omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub restaurant_id: Option<String>,
}

impl CustomerPayload {
    pub fn with_restaurant_id(mut self, restaurant_id: &str) -> Self {
        self.restaurant_id = Some(restaurant_id.to_string());
        self
    }
}

/// Direction of a reward adjustment. Serializes to the lowercase wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardAction {
    Add,
    Redeem,
}

impl RewardAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardAction::Add => "add",
            RewardAction::Redeem => "redeem",
        }
    }
}

impl fmt::Display for RewardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reward adjustment submission. Write-only; the client keeps no copy and
/// sends the raw positive point count for both directions — sign
/// interpretation of a redeem belongs to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardRequest {
    pub customer_id: String,
    pub email: String,
    pub points: u32,
    pub restaurant_id: String,
    #[serde(rename = "type")]
    pub action: RewardAction,
}

/// Paginated restaurant query, optionally filtered by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantListRequest {
    pub page: u32,
    pub limit: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantListResponse {
    #[serde(default)]
    pub data: Vec<Restaurant>,
    #[serde(default)]
    pub total: u64,
}

/// Paginated customer query scoped to one restaurant, optionally filtered
/// by phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListRequest {
    pub page: u32,
    pub limit: u32,
    pub restaurant_id: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListResponse {
    #[serde(default)]
    pub data: Vec<Customer>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

/// Envelope returned by the restaurant add/edit endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Validation failure raised while assembling a mutation payload. No payload
/// means no network call.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// The terms checkbox is unchecked. Checked before anything else.
    TermsNotAccepted,
    /// A required field is empty; carries the field's label.
    MissingField(&'static str),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::TermsNotAccepted => {
                write!(f, "Please accept terms and condition to proceed.")
            }
            FormError::MissingField(label) => write!(f, "{} is required.", label),
        }
    }
}

impl std::error::Error for FormError {}

/// Flat field state backing the restaurant form. The UI edits these fields
/// one at a time; `build_payload` folds them back into the nested API shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantFormFields {
    pub restaurant_name: String,
    pub address: String,
    pub llc: String,
    pub phone_number: String,
    pub email: String,
    pub owner_name: String,
    pub password: String,
    pub primary_contact_name: String,
    pub primary_contact_address: String,
    pub primary_contact_email: String,
    pub agree_terms: bool,
}

impl RestaurantFormFields {
    /// Empty-string defaults for the create flow.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Flattened values for the edit flow. A record without nested contact
    /// details yields empty-string defaults for the contact sub-fields.
    pub fn from_record(record: &Restaurant) -> Self {
        let contact = record.primary_contact_details.clone().unwrap_or(
            PrimaryContactDetails {
                name: String::new(),
                address: String::new(),
                email: String::new(),
            },
        );
        Self {
            restaurant_name: record.restaurant_name.clone(),
            address: record.address.clone(),
            llc: record.llc.clone(),
            phone_number: record.phone_number.clone(),
            email: record.email.clone(),
            owner_name: record.owner_name.clone(),
            password: record.password.clone(),
            primary_contact_name: contact.name,
            primary_contact_address: contact.address,
            primary_contact_email: contact.email,
            agree_terms: record.agreement_accepted,
        }
    }

    /// Validate and assemble the nested mutation payload.
    pub fn build_payload(&self) -> Result<RestaurantPayload, FormError> {
        if !self.agree_terms {
            return Err(FormError::TermsNotAccepted);
        }
        let required: [(&str, &'static str); 10] = [
            (&self.restaurant_name, "Restaurant Name"),
            (&self.address, "Address"),
            (&self.llc, "LLC"),
            (&self.phone_number, "Phone Number"),
            (&self.email, "Email"),
            (&self.owner_name, "Owner Name"),
            (&self.password, "Password"),
            (&self.primary_contact_name, "Primary Contact Name"),
            (&self.primary_contact_address, "Primary Contact Address"),
            (&self.primary_contact_email, "Primary Contact Email"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(label));
            }
        }
        Ok(RestaurantPayload {
            restaurant_name: self.restaurant_name.trim().to_string(),
            address: self.address.trim().to_string(),
            llc: self.llc.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            email: self.email.trim().to_string(),
            owner_name: self.owner_name.trim().to_string(),
            password: self.password.trim().to_string(),
            primary_contact_details: PrimaryContactDetails {
                name: self.primary_contact_name.trim().to_string(),
                address: self.primary_contact_address.trim().to_string(),
                email: self.primary_contact_email.trim().to_string(),
            },
            agreement_accepted: self.agree_terms,
            is_accepted: true,
        })
    }
}

/// Flat field state backing the customer form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerFormFields {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub agree_terms: bool,
}

impl CustomerFormFields {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_record(record: &Customer) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            gender: record.gender.clone(),
            email: record.email.clone(),
            phone_number: record.phone_number.clone(),
            address: record.address.clone(),
            agree_terms: true,
        }
    }

    /// Validate and assemble the flat mutation payload. The caller attaches
    /// `restaurantId` on create via [`CustomerPayload::with_restaurant_id`].
    pub fn build_payload(&self) -> Result<CustomerPayload, FormError> {
        if !self.agree_terms {
            return Err(FormError::TermsNotAccepted);
        }
        let required: [(&str, &'static str); 5] = [
            (&self.first_name, "First Name"),
            (&self.last_name, "Last Name"),
            (&self.gender, "Gender"),
            (&self.email, "Email"),
            (&self.phone_number, "Phone Number"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(label));
            }
        }
        Ok(CustomerPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            gender: self.gender.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            address: self.address.trim().to_string(),
            restaurant_id: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_restaurant_form() -> RestaurantFormFields {
        RestaurantFormFields {
            restaurant_name: "Blue Fig".to_string(),
            address: "12 Market St".to_string(),
            llc: "Blue Fig LLC".to_string(),
            phone_number: "+15551234567".to_string(),
            email: "owner@bluefig.example".to_string(),
            owner_name: "Dana Reyes".to_string(),
            password: "hunter2!".to_string(),
            primary_contact_name: "Sam Ortiz".to_string(),
            primary_contact_address: "12 Market St".to_string(),
            primary_contact_email: "sam@bluefig.example".to_string(),
            agree_terms: true,
        }
    }

    fn sample_customer() -> Customer {
        Customer {
            id: "cust-1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Smith".to_string(),
            gender: "Female".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "+15550001111".to_string(),
            address: "9 Elm Rd".to_string(),
            points: 120,
            created_at: "2024-03-09T12:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_terms_gate_blocks_payload() {
        let mut form = filled_restaurant_form();
        form.agree_terms = false;

        let err = form.build_payload().unwrap_err();
        assert_eq!(err, FormError::TermsNotAccepted);
        assert_eq!(
            err.to_string(),
            "Please accept terms and condition to proceed."
        );
    }

    #[test]
    fn test_terms_checked_before_required_fields() {
        // Even with every field empty, the unchecked box is the error shown.
        let form = RestaurantFormFields::empty();
        assert_eq!(
            form.build_payload().unwrap_err(),
            FormError::TermsNotAccepted
        );
    }

    #[test]
    fn test_missing_required_field() {
        let mut form = filled_restaurant_form();
        form.owner_name = "   ".to_string();

        assert_eq!(
            form.build_payload().unwrap_err(),
            FormError::MissingField("Owner Name")
        );
    }

    #[test]
    fn test_restaurant_payload_wire_shape() {
        let payload = filled_restaurant_form().build_payload().unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["restaurantName"], "Blue Fig");
        assert_eq!(value["llc"], "Blue Fig LLC");
        assert_eq!(value["phoneNumber"], "+15551234567");
        assert_eq!(value["ownerName"], "Dana Reyes");
        assert_eq!(value["primaryContactDetails"]["name"], "Sam Ortiz");
        assert_eq!(value["primaryContactDetails"]["address"], "12 Market St");
        assert_eq!(
            value["primaryContactDetails"]["email"],
            "sam@bluefig.example"
        );
        assert_eq!(value["agreementAccepted"], true);
        assert_eq!(value["isAccepted"], true);
        // Mutation bodies never carry an identifier.
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_from_record_flattens_contact() {
        let record = Restaurant {
            id: "abc123".to_string(),
            restaurant_name: "Blue Fig".to_string(),
            address: "12 Market St".to_string(),
            llc: "Blue Fig LLC".to_string(),
            phone_number: "+15551234567".to_string(),
            email: "owner@bluefig.example".to_string(),
            owner_name: "Dana Reyes".to_string(),
            password: String::new(),
            primary_contact_details: Some(PrimaryContactDetails {
                name: "Sam Ortiz".to_string(),
                address: "12 Market St".to_string(),
                email: "sam@bluefig.example".to_string(),
            }),
            agreement_accepted: true,
            is_accepted: true,
        };

        let form = RestaurantFormFields::from_record(&record);
        assert_eq!(form.restaurant_name, "Blue Fig");
        assert_eq!(form.primary_contact_name, "Sam Ortiz");
        assert_eq!(form.primary_contact_email, "sam@bluefig.example");
        assert!(form.agree_terms);
    }

    #[test]
    fn test_from_record_without_contact_defaults_to_empty() {
        let record: Restaurant = serde_json::from_value(json!({
            "_id": "abc123",
            "restaurantName": "Blue Fig"
        }))
        .unwrap();

        let form = RestaurantFormFields::from_record(&record);
        assert_eq!(form.primary_contact_name, "");
        assert_eq!(form.primary_contact_address, "");
        assert_eq!(form.primary_contact_email, "");
    }

    #[test]
    fn test_customer_payload_restaurant_id_handling() {
        let form = CustomerFormFields::from_record(&sample_customer());

        let edit_body = serde_json::to_value(form.build_payload().unwrap()).unwrap();
        assert!(edit_body.get("restaurantId").is_none());
        assert_eq!(edit_body["firstName"], "Ada");

        let create_body = serde_json::to_value(
            form.build_payload().unwrap().with_restaurant_id("rest-7"),
        )
        .unwrap();
        assert_eq!(create_body["restaurantId"], "rest-7");
    }

    #[test]
    fn test_customer_required_fields() {
        let mut form = CustomerFormFields::from_record(&sample_customer());
        form.address = String::new();
        // Address is optional.
        assert!(form.build_payload().is_ok());

        form.phone_number = String::new();
        assert_eq!(
            form.build_payload().unwrap_err(),
            FormError::MissingField("Phone Number")
        );
    }

    #[test]
    fn test_reward_request_wire_shape() {
        let request = RewardRequest {
            customer_id: "cust-1".to_string(),
            email: "ada@example.com".to_string(),
            points: 50,
            restaurant_id: "rest-7".to_string(),
            action: RewardAction::Add,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "customerId": "cust-1",
                "email": "ada@example.com",
                "points": 50,
                "restaurantId": "rest-7",
                "type": "add"
            })
        );
    }

    #[test]
    fn test_reward_action_lowercases_redeem() {
        let request = RewardRequest {
            customer_id: "cust-1".to_string(),
            email: "ada@example.com".to_string(),
            points: 20,
            restaurant_id: "rest-7".to_string(),
            action: RewardAction::Redeem,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "redeem");
    }

    #[test]
    fn test_list_request_wire_shape() {
        let request = RestaurantListRequest {
            page: 2,
            limit: PAGE_LIMIT,
            name: "fig".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"page": 2, "limit": 10, "name": "fig"}));

        let request = CustomerListRequest {
            page: 1,
            limit: PAGE_LIMIT,
            restaurant_id: "rest-7".to_string(),
            phone: "555".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"page": 1, "limit": 10, "restaurantId": "rest-7", "phone": "555"})
        );
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(23, 10), 3);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
    }

    #[test]
    fn test_registered_on_formats_rfc3339() {
        assert_eq!(sample_customer().registered_on(), "09/03/2024");
    }

    #[test]
    fn test_registered_on_falls_back_to_raw() {
        let mut customer = sample_customer();
        customer.created_at = "not a date".to_string();
        assert_eq!(customer.registered_on(), "not a date");
    }

    #[test]
    fn test_mutation_response_defaults() {
        let response: MutationResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!response.success);
        assert!(response.message.is_none());

        let response: MutationResponse =
            serde_json::from_value(json!({"success": true, "message": "ok"})).unwrap();
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_customer_list_response_lenient_defaults() {
        let response: CustomerListResponse =
            serde_json::from_value(json!({"data": []})).unwrap();
        assert!(response.data.is_empty());
        assert_eq!(response.total, 0);
        assert_eq!(response.total_pages, 0);
    }
}
