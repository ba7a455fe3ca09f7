//! Questionnaire answers
//!
//! Each question has a closed set of option codes. Codes outside that set, and
//! missing answers, parse to the `Unspecified` variant, which carries no
//! multiplier. Parsing never fails.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Declares one answer enumeration with its option codes, labels and multipliers.
macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($code:literal, $label:literal, $mult:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// No answer, or an answer outside the known options
            #[default]
            Unspecified,
        }

        impl $name {
            /// Every recognized option, in presentation order
            pub const OPTIONS: &'static [Self] = &[$(Self::$variant),+];

            /// Parse an option code. Unknown codes map to `Unspecified`.
            #[must_use]
            pub fn from_code(code: &str) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    _ => Self::Unspecified,
                }
            }

            /// Option code as used in stored answers and API payloads
            #[must_use]
            pub const fn code(self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some($code), )+
                    Self::Unspecified => None,
                }
            }

            /// Human-readable option label
            #[must_use]
            pub const fn label(self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some($label), )+
                    Self::Unspecified => None,
                }
            }

            /// Cost multiplier for this option; `None` means identity
            #[must_use]
            pub const fn multiplier(self) -> Option<f64> {
                match self {
                    $( Self::$variant => Some($mult), )+
                    Self::Unspecified => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code().unwrap_or(""))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code().unwrap_or(""))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw.as_deref().map_or(Self::Unspecified, Self::from_code))
            }
        }
    };
}

answer_enum! {
    /// Preferred housing
    Accommodation {
        OnCampus => ("on_campus", "On-Campus Housing", 0.7),
        OffCampus => ("off_campus", "Off-Campus Apartment", 1.1),
        Shared => ("shared", "Shared Accommodation", 0.8),
        Studio => ("studio", "Studio Apartment", 1.3),
        PrivateHostel => ("private_hostel", "Private Hostel", 0.9),
        CoLiving => ("co_living", "Co-living Space", 1.0),
    }
}

answer_enum! {
    /// Eating habits
    FoodHabits {
        CookOwn => ("cook_own", "Cook by Myself", 0.6),
        EatOutside => ("eat_outside", "Eat Outside", 1.4),
        MealPlan => ("meal_plan", "University Meal Plan", 0.8),
    }
}

answer_enum! {
    /// Daily commute
    Transport {
        PublicTransport => ("public_transport", "Public Transport", 1.0),
        Bicycle => ("bicycle", "Bicycle", 0.3),
        Taxi => ("taxi", "Taxi/Uber", 2.5),
    }
}

answer_enum! {
    /// Degree level
    CourseType {
        Bachelor => ("bachelor", "Bachelor's Degree", 0.9),
        Master => ("master", "Master's Degree", 1.1),
    }
}

answer_enum! {
    /// Semester of arrival
    Intake {
        Summer => ("summer", "Summer Intake", 1.0),
        /// Heating pushes living costs up slightly
        Winter => ("winter", "Winter Intake", 1.05),
    }
}

answer_enum! {
    /// Main leisure activity
    Leisure {
        Gym => ("gym", "Gym Membership", 1.1),
        Movies => ("movies", "Movies & Entertainment", 1.15),
        Friends => ("friends", "Social Activities", 1.2),
    }
}

answer_enum! {
    /// Mobile plan
    Mobile {
        BasicPlan => ("basic_plan", "Basic Plan", 0.8),
        PremiumPlan => ("premium_plan", "Premium Plan", 1.3),
    }
}

/// Snapshot of the questionnaire at the time an estimate is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionnaireAnswers {
    /// Degree level
    pub course_type: CourseType,
    /// Semester of arrival
    pub intake: Intake,
    /// Preferred housing
    pub accommodation: Accommodation,
    /// Eating habits
    pub food_habits: FoodHabits,
    /// Daily commute
    pub transport: Transport,
    /// Main leisure activity
    pub leisure: Leisure,
    /// Mobile plan
    pub mobile: Mobile,
}

/// Question identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionId {
    /// `courseType`
    CourseType,
    /// `intake`
    Intake,
    /// `accommodation`
    Accommodation,
    /// `foodHabits`
    FoodHabits,
    /// `transport`
    Transport,
    /// `leisure`
    Leisure,
    /// `mobile`
    Mobile,
}

/// One step of the questionnaire
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Which answer field this question fills
    pub id: QuestionId,
    /// Prompt shown to the user
    pub title: &'static str,
}

/// The questionnaire, in the order it is asked
pub const QUESTIONS: [Question; 7] = [
    Question {
        id: QuestionId::CourseType,
        title: "What type of course are you planning to pursue?",
    },
    Question {
        id: QuestionId::Intake,
        title: "Which intake are you targeting?",
    },
    Question {
        id: QuestionId::Accommodation,
        title: "What type of accommodation do you prefer?",
    },
    Question {
        id: QuestionId::FoodHabits,
        title: "What are your food preferences?",
    },
    Question {
        id: QuestionId::Transport,
        title: "How do you plan to commute?",
    },
    Question {
        id: QuestionId::Leisure,
        title: "What leisure activities interest you?",
    },
    Question {
        id: QuestionId::Mobile,
        title: "What mobile plan do you prefer?",
    },
];

/// `(code, label)` pairs for every option of an answer type
fn option_pairs<T: Copy>(
    all: &[T],
    code: fn(T) -> Option<&'static str>,
    label: fn(T) -> Option<&'static str>,
) -> Vec<(&'static str, &'static str)> {
    all.iter()
        .filter_map(|&opt| Some((code(opt)?, label(opt)?)))
        .collect()
}

impl QuestionId {
    /// Field name used in stored answers (camelCase)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CourseType => "courseType",
            Self::Intake => "intake",
            Self::Accommodation => "accommodation",
            Self::FoodHabits => "foodHabits",
            Self::Transport => "transport",
            Self::Leisure => "leisure",
            Self::Mobile => "mobile",
        }
    }

    /// `(code, label)` pairs for every option of this question
    #[must_use]
    pub fn options(self) -> Vec<(&'static str, &'static str)> {
        match self {
            Self::CourseType => {
                option_pairs(CourseType::OPTIONS, CourseType::code, CourseType::label)
            }
            Self::Intake => option_pairs(Intake::OPTIONS, Intake::code, Intake::label),
            Self::Accommodation => option_pairs(
                Accommodation::OPTIONS,
                Accommodation::code,
                Accommodation::label,
            ),
            Self::FoodHabits => {
                option_pairs(FoodHabits::OPTIONS, FoodHabits::code, FoodHabits::label)
            }
            Self::Transport => option_pairs(Transport::OPTIONS, Transport::code, Transport::label),
            Self::Leisure => option_pairs(Leisure::OPTIONS, Leisure::code, Leisure::label),
            Self::Mobile => option_pairs(Mobile::OPTIONS, Mobile::code, Mobile::label),
        }
    }
}

impl QuestionnaireAnswers {
    /// Record an answer by question id. Unknown codes clear the answer.
    pub fn set(&mut self, id: QuestionId, code: &str) {
        match id {
            QuestionId::CourseType => self.course_type = CourseType::from_code(code),
            QuestionId::Intake => self.intake = Intake::from_code(code),
            QuestionId::Accommodation => self.accommodation = Accommodation::from_code(code),
            QuestionId::FoodHabits => self.food_habits = FoodHabits::from_code(code),
            QuestionId::Transport => self.transport = Transport::from_code(code),
            QuestionId::Leisure => self.leisure = Leisure::from_code(code),
            QuestionId::Mobile => self.mobile = Mobile::from_code(code),
        }
    }

    /// Label of the chosen option for a question, if any
    #[must_use]
    pub const fn label(&self, id: QuestionId) -> Option<&'static str> {
        match id {
            QuestionId::CourseType => self.course_type.label(),
            QuestionId::Intake => self.intake.label(),
            QuestionId::Accommodation => self.accommodation.label(),
            QuestionId::FoodHabits => self.food_habits.label(),
            QuestionId::Transport => self.transport.label(),
            QuestionId::Leisure => self.leisure.label(),
            QuestionId::Mobile => self.mobile.label(),
        }
    }

    /// Number of questions with a recognized answer
    #[must_use]
    pub fn answered_count(&self) -> usize {
        QUESTIONS
            .iter()
            .filter(|q| self.label(q.id).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_is_unspecified() {
        assert_eq!(
            Accommodation::from_code("treehouse"),
            Accommodation::Unspecified
        );
        assert_eq!(Accommodation::Unspecified.multiplier(), None);
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(Accommodation::OnCampus.multiplier(), Some(0.7));
        assert_eq!(FoodHabits::EatOutside.multiplier(), Some(1.4));
        assert_eq!(Transport::Taxi.multiplier(), Some(2.5));
        assert_eq!(Intake::Winter.multiplier(), Some(1.05));
        assert_eq!(Mobile::PremiumPlan.multiplier(), Some(1.3));
    }

    #[test]
    fn test_deserialize_stored_answers() {
        let json = r#"{
            "country": "Germany",
            "courseType": "master",
            "intake": "",
            "accommodation": "treehouse",
            "foodHabits": "cook_own",
            "mobile": null
        }"#;
        let answers: QuestionnaireAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers.course_type, CourseType::Master);
        assert_eq!(answers.intake, Intake::Unspecified);
        assert_eq!(answers.accommodation, Accommodation::Unspecified);
        assert_eq!(answers.food_habits, FoodHabits::CookOwn);
        assert_eq!(answers.transport, Transport::Unspecified);
        assert_eq!(answers.mobile, Mobile::Unspecified);
        assert_eq!(answers.answered_count(), 2);
    }

    #[test]
    fn test_serialize_uses_codes() {
        let mut answers = QuestionnaireAnswers::default();
        answers.set(QuestionId::Transport, "bicycle");
        let value = serde_json::to_value(answers).unwrap();
        assert_eq!(value["transport"], "bicycle");
        assert_eq!(value["foodHabits"], "");
    }

    #[test]
    fn test_every_question_has_options() {
        for question in QUESTIONS {
            assert!(question.id.options().len() >= 2, "{}", question.id.key());
        }
        assert_eq!(QuestionId::Accommodation.options().len(), 6);
    }
}
