//! Strongly-typed questionnaire input.
//!
//! Every bracketed answer is an enum with a total `From<String>` conversion:
//! unknown wire values fall back to a documented per-field default instead of
//! erroring. Scoring therefore never fails on malformed enum input; the
//! worst case is the floor score.

use serde::{Deserialize, Serialize};

/// Whether the candidate already works in software or is switching in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Background {
    #[default]
    Tech,
    NonTech,
}

impl From<String> for Background {
    fn from(s: String) -> Self {
        match s.as_str() {
            "non-tech" => Background::NonTech,
            _ => Background::Tech,
        }
    }
}

impl From<Background> for String {
    fn from(b: Background) -> Self {
        b.as_str().to_string()
    }
}

impl Background {
    pub fn as_str(&self) -> &'static str {
        match self {
            Background::Tech => "tech",
            Background::NonTech => "non-tech",
        }
    }
}

/// Current role bracket. Default: `swe-service` (the most common inbound profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurrentRole {
    SweProduct,
    #[default]
    SweService,
    Devops,
    QaSupport,
    CareerSwitcher,
}

impl From<String> for CurrentRole {
    fn from(s: String) -> Self {
        match s.as_str() {
            "swe-product" => CurrentRole::SweProduct,
            "swe-service" => CurrentRole::SweService,
            "devops" => CurrentRole::Devops,
            "qa-support" => CurrentRole::QaSupport,
            "career-switcher" => CurrentRole::CareerSwitcher,
            _ => CurrentRole::default(),
        }
    }
}

impl From<CurrentRole> for String {
    fn from(r: CurrentRole) -> Self {
        r.as_str().to_string()
    }
}

impl CurrentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrentRole::SweProduct => "swe-product",
            CurrentRole::SweService => "swe-service",
            CurrentRole::Devops => "devops",
            CurrentRole::QaSupport => "qa-support",
            CurrentRole::CareerSwitcher => "career-switcher",
        }
    }
}

/// Years of professional experience. Default: `0-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Experience {
    Zero,
    #[default]
    ZeroToTwo,
    TwoToThree,
    ThreeToFive,
    FiveToEight,
    FivePlus,
    EightPlus,
}

impl From<String> for Experience {
    fn from(s: String) -> Self {
        match s.as_str() {
            "0" => Experience::Zero,
            "0-2" => Experience::ZeroToTwo,
            "2-3" => Experience::TwoToThree,
            "3-5" => Experience::ThreeToFive,
            "5-8" => Experience::FiveToEight,
            "5+" => Experience::FivePlus,
            "8+" => Experience::EightPlus,
            _ => Experience::default(),
        }
    }
}

impl From<Experience> for String {
    fn from(e: Experience) -> Self {
        e.as_str().to_string()
    }
}

impl Experience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Zero => "0",
            Experience::ZeroToTwo => "0-2",
            Experience::TwoToThree => "2-3",
            Experience::ThreeToFive => "3-5",
            Experience::FiveToEight => "5-8",
            Experience::FivePlus => "5+",
            Experience::EightPlus => "8+",
        }
    }

    /// Under two years of experience, including fresh grads.
    pub fn is_under_two_years(&self) -> bool {
        matches!(self, Experience::Zero | Experience::ZeroToTwo)
    }

    /// Five or more years.
    pub fn is_senior(&self) -> bool {
        matches!(
            self,
            Experience::FiveToEight | Experience::FivePlus | Experience::EightPlus
        )
    }
}

/// Interview-problem practice over the last few months. Default: `0-10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProblemSolving {
    #[default]
    ZeroToTen,
    ElevenToFifty,
    FiftyOneToHundred,
    HundredPlus,
}

impl From<String> for ProblemSolving {
    fn from(s: String) -> Self {
        match s.as_str() {
            "0-10" => ProblemSolving::ZeroToTen,
            "11-50" => ProblemSolving::ElevenToFifty,
            "51-100" => ProblemSolving::FiftyOneToHundred,
            "100+" => ProblemSolving::HundredPlus,
            _ => ProblemSolving::default(),
        }
    }
}

impl From<ProblemSolving> for String {
    fn from(p: ProblemSolving) -> Self {
        p.as_str().to_string()
    }
}

impl ProblemSolving {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemSolving::ZeroToTen => "0-10",
            ProblemSolving::ElevenToFifty => "11-50",
            ProblemSolving::FiftyOneToHundred => "51-100",
            ProblemSolving::HundredPlus => "100+",
        }
    }

    /// Position on the ascending practice scale, for ordinal gap math.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// System-design exposure. Default: `not-yet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SystemDesign {
    #[default]
    NotYet,
    Learning,
    Once,
    Multiple,
}

impl From<String> for SystemDesign {
    fn from(s: String) -> Self {
        match s.as_str() {
            "not-yet" => SystemDesign::NotYet,
            "learning" => SystemDesign::Learning,
            "once" => SystemDesign::Once,
            "multiple" => SystemDesign::Multiple,
            _ => SystemDesign::default(),
        }
    }
}

impl From<SystemDesign> for String {
    fn from(d: SystemDesign) -> Self {
        d.as_str().to_string()
    }
}

impl SystemDesign {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemDesign::NotYet => "not-yet",
            SystemDesign::Learning => "learning",
            SystemDesign::Once => "once",
            SystemDesign::Multiple => "multiple",
        }
    }

    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// Public portfolio activity. Default: `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Portfolio {
    #[default]
    None,
    Inactive,
    LimitedOneToFive,
    ActiveFivePlus,
}

impl From<String> for Portfolio {
    fn from(s: String) -> Self {
        match s.as_str() {
            "none" => Portfolio::None,
            "inactive" => Portfolio::Inactive,
            "limited-1-5" => Portfolio::LimitedOneToFive,
            "active-5+" => Portfolio::ActiveFivePlus,
            _ => Portfolio::default(),
        }
    }
}

impl From<Portfolio> for String {
    fn from(p: Portfolio) -> Self {
        p.as_str().to_string()
    }
}

impl Portfolio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Portfolio::None => "none",
            Portfolio::Inactive => "inactive",
            Portfolio::LimitedOneToFive => "limited-1-5",
            Portfolio::ActiveFivePlus => "active-5+",
        }
    }

    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// Target company bracket. Unrecognised values are preserved verbatim so the
/// display label can still echo the user's own words. Default: `evaluating`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetCompany {
    Faang,
    FaangLongterm,
    Unicorns,
    Product,
    Startups,
    Service,
    BetterService,
    AnyTech,
    Evaluating,
    NotSure,
    Other(String),
}

impl Default for TargetCompany {
    fn default() -> Self {
        TargetCompany::Evaluating
    }
}

impl From<String> for TargetCompany {
    fn from(s: String) -> Self {
        match s.as_str() {
            "faang" => TargetCompany::Faang,
            "faang-longterm" => TargetCompany::FaangLongterm,
            "unicorns" => TargetCompany::Unicorns,
            "product" => TargetCompany::Product,
            "startups" => TargetCompany::Startups,
            "service" => TargetCompany::Service,
            "better-service" => TargetCompany::BetterService,
            "any-tech" => TargetCompany::AnyTech,
            "evaluating" => TargetCompany::Evaluating,
            "not-sure" => TargetCompany::NotSure,
            "" => TargetCompany::Evaluating,
            _ => TargetCompany::Other(s),
        }
    }
}

impl From<TargetCompany> for String {
    fn from(c: TargetCompany) -> Self {
        c.as_str().to_string()
    }
}

impl TargetCompany {
    pub fn as_str(&self) -> &str {
        match self {
            TargetCompany::Faang => "faang",
            TargetCompany::FaangLongterm => "faang-longterm",
            TargetCompany::Unicorns => "unicorns",
            TargetCompany::Product => "product",
            TargetCompany::Startups => "startups",
            TargetCompany::Service => "service",
            TargetCompany::BetterService => "better-service",
            TargetCompany::AnyTech => "any-tech",
            TargetCompany::Evaluating => "evaluating",
            TargetCompany::NotSure => "not-sure",
            TargetCompany::Other(s) => s,
        }
    }
}

fn default_mock_interviews() -> String {
    "never".to_string()
}

fn default_current_company() -> String {
    "your current company".to_string()
}

/// The flat answer mapping sent by the quiz client.
/// Optional `*Label` fields carry human-readable overrides for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizResponses {
    pub current_role: CurrentRole,
    pub experience: Experience,
    pub target_role: String,
    pub problem_solving: ProblemSolving,
    pub system_design: SystemDesign,
    pub portfolio: Portfolio,
    #[serde(default = "default_mock_interviews")]
    pub mock_interviews: String,
    #[serde(default = "default_current_company")]
    pub current_company: String,
    pub current_skill: String,
    pub requirement_type: String,
    pub target_company: TargetCompany,
    pub current_role_label: Option<String>,
    pub target_role_label: Option<String>,
    pub target_company_label: Option<String>,
    pub primary_goal: Option<String>,
}

impl QuizResponses {
    /// The user explicitly has no concrete target role yet.
    pub fn is_exploring(&self) -> bool {
        matches!(self.target_role.as_str(), "not-sure" | "exploring" | "")
    }
}

/// Goals block carried alongside the quiz answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Goals {
    pub requirement_type: Vec<String>,
    pub target_company: String,
    pub topic_of_interest: Vec<String>,
}

/// Inbound evaluation request: background discriminator + answers + goals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationRequest {
    pub background: Background,
    pub quiz_responses: QuizResponses,
    pub goals: Goals,
}
