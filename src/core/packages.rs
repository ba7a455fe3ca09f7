//! Consultancy service packages and their backend bucket names

use crate::core::error::ValidationError;
use crate::warn;
use serde::Serialize;

/// A service bundle offered alongside the cost estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServicePackage {
    /// Stable identifier used on the command line and in the session
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Bullet points listed under the package
    pub features: &'static [&'static str],
    /// Pricing bucket the backend understands
    #[serde(skip)]
    pub bucket: &'static str,
    /// Highlighted as a popular choice
    #[serde(skip)]
    pub popular: bool,
}

/// All packages, in display order
pub static PACKAGES: [ServicePackage; 7] = [
    ServicePackage {
        id: "passport",
        name: "PASSPORT",
        description: "Complete passport application and processing services",
        features: &[
            "Review documents",
            "Generate login & File application",
            "Obtain appointment",
            "Followup police verification",
            "Dispatch status",
            "PASSPORT FEE INCLUDED",
        ],
        bucket: "Bucket-1",
        popular: false,
    },
    ServicePackage {
        id: "counselling",
        name: "CAREER COUNSELLING & PRE-APPLICATION ASSISTANCE + UNIVERSITY APPLICATION",
        description: "Comprehensive guidance for university selection and applications",
        features: &[
            "Detailed profile evaluation",
            "1:1 Mentorship & document analysis",
            "Eligibility check",
            "Finalize desired country and course selection",
            "Evaluation and finalization of the budget",
            "Statement of purpose preparation & review",
            "Letter of recommendation preparation & review",
            "Letter of motivation preparation & review",
            "At least 1 university offer guaranteed (public / aided / private)",
            "CV writing & profile building",
            "Prepare IELTS and language preparation (Regarding training required or not)",
            "Doctor certificate - mandatory for sports medicine course",
            "Application for 6 universities",
            "Get information: Research the requirements for your chosen course",
            "Plan: Use checklists and deadlines to plan your application",
            "Prepare documents: certified copies of educational certificates",
            "Apply online: Register, Fill application, Upload documents",
            "Pay fees: Pay all application handling fees",
            "Send documents: certified copies by mail and post",
            "Track: Monitor application status with Uni-Assist and universities",
        ],
        bucket: "Bucket-2",
        popular: true,
    },
    ServicePackage {
        id: "aps",
        name: "APS CERTIFICATION",
        description: "Academic evaluation and certification for German universities",
        features: &[
            "APS Advice & Documentation ADVICE",
            "Application process",
            "Pay APS fee 18000 (included)",
            "Send post to Delhi",
            "For faster processing we depute our staff in New Delhi",
            "Getting APS certificate 4 to 6 weeks",
        ],
        bucket: "Bucket-3",
        popular: false,
    },
    ServicePackage {
        id: "language",
        name: "IELTS / TOEFL + LANGUAGE TRAINING (German, French, Spain and more)",
        description: "Complete language preparation and certification program",
        features: &[
            "Mock test - 80 test series to ensure good score",
            "Training - hybrid training for better results - 2 months with all study materials",
            "Every mock test gets evaluated by trainer and exchange of feedback",
            "Experience Faculty with real time training and advice on every test",
            "Including exam fees",
            "Guidance for language Training",
            "Level -A1: Hybrid classes for 100 hrs, 4 days online and 1-day offline class",
            "Textbook and audio components, planner, study materials",
            "Including Exam Fees & Issue of Certificate",
            "Level - A2: Hybrid classes for 100 hrs, 4 days online and 1-day offline class",
            "Experience Faculty with real time training and advice",
        ],
        bucket: "Bucket-4",
        popular: true,
    },
    ServicePackage {
        id: "visa",
        name: "VISA PROCESS",
        description: "Complete visa processing and financial assistance package",
        features: &[
            "Visa Documentation Advice",
            "Visa questions & mock interview preparation",
            "Visa appointment via VFS portal inc global & courier charges",
            "Visa fee included",
        ],
        bucket: "Bucket-5",
        popular: false,
    },
    ServicePackage {
        id: "study-abroad-essentials",
        name: "PRE AND POST TRAVEL ESSENTIALS",
        description: "Additional support services for your study abroad journey",
        features: &[
            "Travel kit: All students will be issued a travel essential kit",
            "Forex card: Prepaid forex card will be issued",
            "Scholarship: As per eligibility, if student qualifies",
            "Part time job: we provide assistance to get part-time jobs",
            "Tax registration: In Germany city registration appointment and documentation",
            "Bank Account: Both NRO and NRI A/c will be opened in India, in addition, German bank account will also be provided",
            "SIM card services: We provide Prepaid German SIM card",
            "Airport pickup: Available to drop off at your accommodation",
            "Germany law briefing",
            "Student's life in Germany briefing",
            "Assistance provided for work visa in respective chosen country, for an extra 2 years after completion of Master's",
        ],
        bucket: "Bucket-6",
        popular: false,
    },
    ServicePackage {
        id: "others",
        name: "OTHERS",
        description: "Additional services for your study abroad journey",
        features: &[
            "Financial Assistance : Education Loan upto 50 Lakhs (non colatral)",
            "All Govt schemes applicable depending on the criteria",
            "TRAVEL INSURANCE IN GERMANY- FOR 2 YEARS : Travel Insurance valid for 2 years (24 months) - Multiple entry. Mandatory requirement of Travel insurance for Visa Authority",
            "AIRTICKET - ANY DATE - ECONOMY : One way Travel Ticket, Reservation of the Seats (Travel class - Economy) and Includes 60+ Kg of check-in baggage + Hand luggage of 8kg",
            "Those who take Accomodation with us, we provide 24/7 HOTLINE service to ensure students safty to parents",
        ],
        bucket: "Bucket-7",
        popular: false,
    },
];

/// Look up a package by id
#[must_use]
pub fn find_package(id: &str) -> Option<&'static ServicePackage> {
    PACKAGES.iter().find(|p| p.id == id)
}

/// A validated, non-empty package selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSelection {
    packages: Vec<&'static ServicePackage>,
}

impl PackageSelection {
    /// Resolve package ids, skipping unknown ones and duplicates.
    ///
    /// # Errors
    /// Returns `NoPackageSelected` if no known package remains.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self, ValidationError> {
        let mut packages: Vec<&'static ServicePackage> = Vec::new();
        for id in ids {
            let id = id.as_ref();
            match find_package(id) {
                Some(pkg) if !packages.contains(&pkg) => packages.push(pkg),
                Some(_) => {}
                None => warn!("No bucket mapping found for package: {id}"),
            }
        }
        if packages.is_empty() {
            return Err(ValidationError::NoPackageSelected);
        }
        Ok(Self { packages })
    }

    /// Every package
    #[must_use]
    pub fn all() -> Self {
        Self {
            packages: PACKAGES.iter().collect(),
        }
    }

    /// Selected package ids
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.packages.iter().map(|p| p.id).collect()
    }

    /// Backend bucket names for the selection
    #[must_use]
    pub fn buckets(&self) -> Vec<&'static str> {
        self.packages.iter().map(|p| p.bucket).collect()
    }

    /// Selected packages
    #[must_use]
    pub fn packages(&self) -> &[&'static ServicePackage] {
        &self.packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_mapping() {
        let selection = PackageSelection::from_ids(&["visa", "passport"]).unwrap();
        assert_eq!(selection.buckets(), vec!["Bucket-5", "Bucket-1"]);
        assert_eq!(selection.ids(), vec!["visa", "passport"]);
    }

    #[test]
    fn test_unknown_and_duplicate_ids_are_skipped() {
        let selection = PackageSelection::from_ids(&["aps", "spaceflight", "aps"]).unwrap();
        assert_eq!(selection.buckets(), vec!["Bucket-3"]);
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(
            PackageSelection::from_ids(&empty),
            Err(ValidationError::NoPackageSelected)
        );
        assert_eq!(
            PackageSelection::from_ids(&["nothing"]),
            Err(ValidationError::NoPackageSelected)
        );
    }

    #[test]
    fn test_every_package_lists_features() {
        assert!(PACKAGES.iter().all(|p| !p.features.is_empty()));
        assert_eq!(find_package("visa").unwrap().features.len(), 4);
    }

    #[test]
    fn test_all_packages_have_distinct_buckets() {
        let mut buckets = PackageSelection::all().buckets();
        buckets.sort_unstable();
        buckets.dedup();
        assert_eq!(buckets.len(), PACKAGES.len());
    }
}
