//! Account-creation and phone-verification dialogs.
//!
//! The site never creates an account: the sequence ends with the visitor
//! picking a phone network and being sent to that network's affiliate link.
//! Job seekers reach it from a listing card, employers from the landing page;
//! the employer form is validated before the network step.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Nationalities offered by the employer form.
pub const NATIONALITIES: &[&str] = &[
    "uae",
    "saudi",
    "egyptian",
    "indian",
    "pakistani",
    "bangladeshi",
    "filipino",
    "sri_lankan",
    "nepali",
    "jordanian",
    "lebanese",
    "syrian",
    "yemeni",
    "sudanese",
    "moroccan",
];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FlowKind {
    JobSeeker,
    Employer,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Closed,
    Prompt,
    Registration,
    NetworkSelection,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Nationality,
    PhoneNumber,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::FullName => "full_name",
            Field::Nationality => "nationality",
            Field::PhoneNumber => "phone_number",
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub nationality: String,
    pub phone_number: String,
}

impl SignupForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Nationality => self.nationality = value,
            Field::PhoneNumber => self.phone_number = value,
        }
    }

    /// Fields that are empty after trimming, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        [
            (Field::FullName, &self.full_name),
            (Field::Nationality, &self.nationality),
            (Field::PhoneNumber, &self.phone_number),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn clear(&mut self) {
        *self = SignupForm::default();
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    Etisalat,
    Du,
    Mobily,
    Stc,
    VirginMobile,
}

impl Network {
    pub const ALL: [Network; 5] = [
        Network::Etisalat,
        Network::Du,
        Network::Mobily,
        Network::Stc,
        Network::VirginMobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Etisalat => "etisalat",
            Network::Du => "du",
            Network::Mobily => "mobily",
            Network::Stc => "stc",
            Network::VirginMobile => "virgin-mobile",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Etisalat => "Etisalat",
            Network::Du => "du",
            Network::Mobily => "Mobily",
            Network::Stc => "STC",
            Network::VirginMobile => "Virgin Mobile",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown network: {0}")]
pub struct ParseNetworkError(pub String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Network::ALL
            .into_iter()
            .find(|n| n.as_str() == needle)
            .ok_or_else(|| ParseNetworkError(s.to_string()))
    }
}

/// Outbound verification link per network. Networks without an entry get no redirect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkLinks(HashMap<Network, String>);

impl NetworkLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, network: Network, url: impl Into<String>) -> Self {
        self.insert(network, url);
        self
    }

    pub fn insert(&mut self, network: Network, url: impl Into<String>) {
        self.0.insert(network, url.into());
    }

    pub fn get(&self, network: Network) -> Option<&str> {
        self.0.get(&network).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FlowAction {
    Open,
    CreateAccount,
    UpdateField { field: Field, value: String },
    ConfirmPhone,
    SelectNetwork { network: Network },
    Cancel,
}

impl FlowAction {
    fn name(&self) -> &'static str {
        match self {
            FlowAction::Open => "open",
            FlowAction::CreateAccount => "create_account",
            FlowAction::UpdateField { .. } => "update_field",
            FlowAction::ConfirmPhone => "confirm_phone",
            FlowAction::SelectNetwork { .. } => "select_network",
            FlowAction::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FlowError {
    #[error("required fields are empty: {}", join_fields(.0))]
    MissingFields(Vec<Field>),

    #[error("cannot {action} while {stage:?}")]
    InvalidTransition { stage: Stage, action: &'static str },
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// What a successful step produced.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct StepOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SignupFlow {
    kind: FlowKind,
    stage: Stage,
    form: SignupForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<String>,
}

impl SignupFlow {
    pub fn new(kind: FlowKind) -> Self {
        SignupFlow {
            kind,
            stage: Stage::Closed,
            form: SignupForm::default(),
            job_id: None,
        }
    }

    /// A job-seeker flow started from a specific listing card.
    pub fn for_job(job_id: impl Into<String>) -> Self {
        SignupFlow {
            job_id: Some(job_id.into()),
            ..SignupFlow::new(FlowKind::JobSeeker)
        }
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    /// Applies one visitor action. On error the flow is left untouched.
    pub fn apply(
        &mut self,
        action: FlowAction,
        links: &NetworkLinks,
    ) -> Result<StepOutcome, FlowError> {
        let invalid = |stage: Stage, action: &FlowAction| FlowError::InvalidTransition {
            stage,
            action: action.name(),
        };

        match (self.stage, action) {
            (Stage::Closed, FlowAction::Open) => {
                self.stage = Stage::Prompt;
            }
            (Stage::Prompt, FlowAction::CreateAccount) => {
                self.stage = Stage::Registration;
            }
            (Stage::Registration, FlowAction::UpdateField { field, value }) => {
                self.form.set(field, value);
            }
            (Stage::Registration, FlowAction::ConfirmPhone) => {
                if self.kind == FlowKind::Employer {
                    let missing = self.form.missing_fields();
                    if !missing.is_empty() {
                        debug!("Signup blocked, missing {:?}", missing);
                        return Err(FlowError::MissingFields(missing));
                    }
                }
                self.stage = Stage::NetworkSelection;
            }
            (Stage::NetworkSelection, FlowAction::SelectNetwork { network }) => {
                info!("Selected network: {}", network);
                let redirect = links.get(network).map(str::to_string);
                self.form.clear();
                if self.kind == FlowKind::Employer {
                    self.stage = Stage::Closed;
                }
                return Ok(StepOutcome { redirect });
            }
            (stage, FlowAction::Cancel) if stage != Stage::Closed => {
                self.stage = Stage::Closed;
            }
            (stage, action) => return Err(invalid(stage, &action)),
        }

        Ok(StepOutcome::default())
    }
}
