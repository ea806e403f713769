use std::fmt;
use std::str::FromStr;

/// Display language for every user-visible label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    English,
    Marathi,
}

impl Locale {
    #[must_use]
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Marathi => &MARATHI,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Marathi => "mr",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale `{}` (expected en or mr)", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "mr" | "marathi" => Ok(Locale::Marathi),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One locale's label table.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub app_title: &'static str,
    pub class_subtitle: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub roll_label: &'static str,
    pub roll_placeholder: &'static str,
    pub continue_button: &'static str,
    pub please_wait: &'static str,

    pub instructions_title: &'static str,
    pub ready_badge: &'static str,
    pub time_limit: &'static str,
    pub minutes: &'static str,
    pub auto_submit_rule: &'static str,
    pub pick_one_rule: &'static str,
    pub keyboard_rule: &'static str,
    pub report_rule: &'static str,
    pub start_button: &'static str,
    pub loading_questions: &'static str,

    pub progress: &'static str,
    pub question: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub finish: &'static str,
    pub navigator: &'static str,
    pub answered: &'static str,
    pub unanswered: &'static str,
    pub current: &'static str,
    pub sections: &'static str,
    pub submitting: &'static str,

    pub result_title: &'static str,
    pub result_greeting: &'static str,
    pub score: &'static str,
    pub total_questions: &'static str,
    pub answered_count: &'static str,
    pub percentage: &'static str,
    pub report_title: &'static str,
    pub report_empty: &'static str,
    pub timer_submitted_note: &'static str,
    pub submitted_at: &'static str,
    pub reanalyze: &'static str,
    pub reanalyzing: &'static str,
    pub restart: &'static str,

    pub ok: &'static str,
    pub missing_details: &'static str,
    pub login_failed: &'static str,
    pub no_questions: &'static str,
    pub connection_failed: &'static str,
    pub session_unavailable: &'static str,
    pub submit_failed: &'static str,
    pub nothing_to_reanalyze: &'static str,
    pub reanalyze_failed: &'static str,
    pub unknown_error: &'static str,
}

static ENGLISH: Labels = Labels {
    app_title: "Student Test",
    class_subtitle: "Class 6th - Marathi Medium",
    name_label: "Student Name",
    name_placeholder: "Enter your name",
    roll_label: "Roll Number",
    roll_placeholder: "Example: 24",
    continue_button: "Next",
    please_wait: "Please wait...",

    instructions_title: "Instructions for",
    ready_badge: "Ready?",
    time_limit: "Time limit",
    minutes: "minutes",
    auto_submit_rule: "The test submits itself when time runs out.",
    pick_one_rule: "Select the correct answer from the given options.",
    keyboard_rule: "Use the arrow keys to move between questions and 1-9 to pick an option.",
    report_rule: "Your result will be shown at the end with a report.",
    start_button: "Start Test",
    loading_questions: "Loading questions...",

    progress: "Progress",
    question: "Question",
    previous: "Previous",
    next: "Next",
    finish: "Finish",
    navigator: "Navigator",
    answered: "Answered",
    unanswered: "Not answered",
    current: "Current",
    sections: "Sections",
    submitting: "Submitting your answers...",

    result_title: "Test completed!",
    result_greeting: "Superb effort",
    score: "Your Score",
    total_questions: "Total Questions",
    answered_count: "Answered",
    percentage: "Percentage",
    report_title: "Performance Report",
    report_empty: "No report was returned.",
    timer_submitted_note: "Time ran out, so your answers were submitted automatically.",
    submitted_at: "Submitted",
    reanalyze: "Re-analyze",
    reanalyzing: "Analyzing...",
    restart: "Take another test",

    ok: "OK",
    missing_details: "Please enter your name and roll number.",
    login_failed: "Login failed. Please check the backend.",
    no_questions: "Failed to load questions.",
    connection_failed: "Error connecting to server.",
    session_unavailable: "The test could not be started. Please start again.",
    submit_failed: "Error submitting quiz. Please start again.",
    nothing_to_reanalyze: "No answers found to re-analyze.",
    reanalyze_failed: "Re-analysis failed. Please try again.",
    unknown_error: "Something went wrong. Please try again.",
};

static MARATHI: Labels = Labels {
    app_title: "विद्यार्थी परीक्षा",
    class_subtitle: "इयत्ता ६वी - मराठी माध्यम",
    name_label: "विद्यार्थ्याचे नाव",
    name_placeholder: "तुमचे नाव लिहा",
    roll_label: "रोल नंबर",
    roll_placeholder: "उदा: 24",
    continue_button: "पुढील",
    please_wait: "कृपया थांबा...",

    instructions_title: "सूचना:",
    ready_badge: "तयार?",
    time_limit: "वेळ मर्यादा",
    minutes: "मिनिटे",
    auto_submit_rule: "वेळ संपताच परीक्षा आपोआप सबमिट होईल.",
    pick_one_rule: "दिलेल्या पर्यायांमधून योग्य उत्तर निवडा.",
    keyboard_rule: "प्रश्न बदलण्यासाठी बाण कळा आणि पर्याय निवडण्यासाठी 1-9 वापरा.",
    report_rule: "शेवटी अहवालासह तुमचा निकाल दाखवला जाईल.",
    start_button: "परीक्षा सुरू करा",
    loading_questions: "प्रश्न लोड होत आहेत...",

    progress: "प्रगती",
    question: "प्रश्न",
    previous: "मागील",
    next: "पुढील",
    finish: "पूर्ण करा",
    navigator: "नेव्हिगेटर",
    answered: "उत्तर दिलेले",
    unanswered: "बाकी",
    current: "सध्याचा",
    sections: "विभाग",
    submitting: "उत्तरे सबमिट होत आहेत...",

    result_title: "परीक्षा पूर्ण झाली!",
    result_greeting: "छान प्रयत्न",
    score: "तुमचे गुण",
    total_questions: "एकूण प्रश्न",
    answered_count: "उत्तर दिलेले",
    percentage: "टक्केवारी",
    report_title: "कामगिरी अहवाल",
    report_empty: "अहवाल मिळाला नाही.",
    timer_submitted_note: "वेळ संपल्यामुळे तुमची उत्तरे आपोआप सबमिट झाली.",
    submitted_at: "सबमिट वेळ",
    reanalyze: "पुन्हा विश्लेषण करा",
    reanalyzing: "विश्लेषण सुरू आहे...",
    restart: "दुसरी परीक्षा द्या",

    ok: "ठीक आहे",
    missing_details: "कृपया नाव आणि रोल नंबर भरा.",
    login_failed: "लॉगिन अयशस्वी. कृपया सर्व्हर तपासा.",
    no_questions: "प्रश्न लोड करता आले नाहीत.",
    connection_failed: "सर्व्हरशी जोडणी होऊ शकली नाही.",
    session_unavailable: "परीक्षा सुरू करता आली नाही. कृपया पुन्हा सुरू करा.",
    submit_failed: "उत्तरे सबमिट करताना त्रुटी आली. कृपया पुन्हा सुरू करा.",
    nothing_to_reanalyze: "पुन्हा विश्लेषणासाठी उत्तरे नाहीत.",
    reanalyze_failed: "पुन्हा विश्लेषण अयशस्वी. कृपया पुन्हा प्रयत्न करा.",
    unknown_error: "काहीतरी चुकले. कृपया पुन्हा प्रयत्न करा.",
};
