//! Enumerated content labels.
//!
//! Each enum maps one-to-one onto the display strings stored in the
//! database (enforced there by CHECK constraints) and exchanged over the
//! wire. The first listed variant is the default applied when a request
//! omits the field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

macro_rules! define_label_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $default:ident => $default_label:literal
            $(, $variant:ident => $label:literal )* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $default,
            $( $variant ),*
        }

        impl $name {
            /// Every variant, default first.
            pub const ALL: &'static [$name] = &[$name::$default $(, $name::$variant)*];

            /// The stored/display label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $name::$default => $default_label,
                    $( $name::$variant => $label ),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $default_label => Ok($name::$default),
                    $( $label => Ok($name::$variant), )*
                    other => Err(CoreError::Validation(format!(
                        "unknown {} '{other}'",
                        stringify!($name)
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_label_enum! {
    /// Construction stage of a project.
    ProjectStatus {
        UnderConstruction => "Under Construction",
        ReadyToMove => "Ready to Move",
        LaunchingSoon => "Launching Soon",
    }
}

define_label_enum! {
    /// Kind of residential unit a project offers.
    PropertyType {
        Apartment => "Apartment",
        Villa => "Villa",
        Penthouse => "Penthouse",
    }
}

define_label_enum! {
    NewsCategory {
        Launch => "Launch",
        Progress => "Progress",
        Awards => "Awards",
        Sustainability => "Sustainability",
        MarketAnalysis => "Market Analysis",
    }
}

define_label_enum! {
    BlogCategory {
        MarketInsights => "Market Insights",
        BuyingGuide => "Buying Guide",
        Sustainability => "Sustainability",
        Investment => "Investment",
        Design => "Design",
        Finance => "Finance",
    }
}

define_label_enum! {
    /// Department a job opening belongs to.
    Department {
        Construction => "Construction",
        Marketing => "Marketing",
        Sales => "Sales",
        Design => "Design",
        Finance => "Finance",
        HumanResources => "Human Resources",
    }
}

define_label_enum! {
    EmploymentType {
        FullTime => "Full-time",
        PartTime => "Part-time",
        Contract => "Contract",
        Internship => "Internship",
    }
}

define_label_enum! {
    /// Whether a job opening still accepts applications.
    JobStatus {
        Active => "Active",
        Closed => "Closed",
    }
}

define_label_enum! {
    /// Triage state of a contact-form submission.
    SubmissionStatus {
        New => "New",
        InProgress => "In Progress",
        Resolved => "Resolved",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn defaults_match_schema_defaults() {
        assert_eq!(ProjectStatus::default().as_str(), "Under Construction");
        assert_eq!(PropertyType::default().as_str(), "Apartment");
        assert_eq!(NewsCategory::default().as_str(), "Launch");
        assert_eq!(BlogCategory::default().as_str(), "Market Insights");
        assert_eq!(Department::default().as_str(), "Construction");
        assert_eq!(EmploymentType::default().as_str(), "Full-time");
        assert_eq!(JobStatus::default().as_str(), "Active");
        assert_eq!(SubmissionStatus::default().as_str(), "New");
    }

    #[test]
    fn labels_parse_back() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), *status);
        }
        for dept in Department::ALL {
            assert_eq!(Department::try_from(dept.to_string()).unwrap(), *dept);
        }
    }

    #[test]
    fn unknown_label_is_a_validation_error() {
        assert_matches!(
            "Castle".parse::<PropertyType>(),
            Err(CoreError::Validation(msg)) if msg.contains("Castle")
        );
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_value(SubmissionStatus::InProgress).unwrap();
        assert_eq!(json, "In Progress");

        let parsed: EmploymentType = serde_json::from_str("\"Part-time\"").unwrap();
        assert_eq!(parsed, EmploymentType::PartTime);

        assert!(serde_json::from_str::<JobStatus>("\"Open\"").is_err());
    }
}
