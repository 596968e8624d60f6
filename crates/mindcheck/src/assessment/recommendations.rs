use super::domain::Recommendations;

/// Score range used to pick a recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreBand {
    Low,
    Moderate,
    High,
}

impl ScoreBand {
    pub const LOW_CEILING: u32 = 5;
    pub const MODERATE_CEILING: u32 = 10;

    pub fn from_total(total: u32) -> Self {
        if total <= Self::LOW_CEILING {
            Self::Low
        } else if total <= Self::MODERATE_CEILING {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

const DEPRESSION_LOW: &[&str] = &[
    "Maintain regular physical activity",
    "Practice mindfulness for 10 minutes daily",
    "Keep a gratitude journal",
];

const DEPRESSION_MODERATE: &[&str] = &[
    "Consider speaking with a mental health professional",
    "Establish consistent sleep patterns",
    "Engage in activities that previously brought joy",
    "Connect with supportive friends or family",
];

const DEPRESSION_HIGH: &[&str] = &[
    "Consult with a healthcare provider about your symptoms",
    "Join a support group",
    "Limit alcohol and caffeine consumption",
    "Create daily structure with small, achievable goals",
];

const ANXIETY_LOW: &[&str] = &[
    "Practice deep breathing exercises",
    "Limit exposure to negative news",
    "Maintain regular physical activity",
];

const ANXIETY_MODERATE: &[&str] = &[
    "Try progressive muscle relaxation techniques",
    "Consider speaking with a mental health professional",
    "Keep a worry journal to identify patterns",
    "Establish healthy boundaries in stressful situations",
];

const ANXIETY_HIGH: &[&str] = &[
    "Consult with a healthcare provider about your symptoms",
    "Try cognitive behavioral techniques",
    "Practice daily meditation",
    "Consider limiting stimulants like caffeine",
];

pub fn depression_suggestions(band: ScoreBand) -> &'static [&'static str] {
    match band {
        ScoreBand::Low => DEPRESSION_LOW,
        ScoreBand::Moderate => DEPRESSION_MODERATE,
        ScoreBand::High => DEPRESSION_HIGH,
    }
}

pub fn anxiety_suggestions(band: ScoreBand) -> &'static [&'static str] {
    match band {
        ScoreBand::Low => ANXIETY_LOW,
        ScoreBand::Moderate => ANXIETY_MODERATE,
        ScoreBand::High => ANXIETY_HIGH,
    }
}

pub fn recommend(depression_total: u32, anxiety_total: u32) -> Recommendations {
    let depression = ScoreBand::from_total(depression_total);
    let anxiety = ScoreBand::from_total(anxiety_total);

    Recommendations {
        depression: owned_lines(depression_suggestions(depression)),
        anxiety: owned_lines(anxiety_suggestions(anxiety)),
    }
}

fn owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
