//! Static language packs for the registration wizard.
//!
//! Three packs ship with the binary: English, Nepali, and Jirel. Every
//! label the page templates reference lives here; unknown language codes
//! fall back to English.

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ne,
    Ji,
}

impl Lang {
    /// Parse a language code, falling back to English for anything unknown.
    pub fn parse(code: &str) -> Self {
        match code {
            "ne" => Lang::Ne,
            "ji" => Lang::Ji,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ne => "ne",
            Lang::Ji => "ji",
        }
    }
}

/// Section headings shown at the top of each wizard page.
#[derive(Debug, Serialize)]
pub struct Sections {
    pub language: &'static str,
    pub member_info: &'static str,
    pub contact: &'static str,
    pub gov_doc: &'static str,
    pub education: &'static str,
    pub professional: &'static str,
    pub membership: &'static str,
    pub family: &'static str,
    pub emergency: &'static str,
    pub payment: &'static str,
    pub declaration: &'static str,
    pub review: &'static str,
}

/// Per-field labels.
#[derive(Debug, Serialize)]
pub struct Fields {
    pub name: &'static str,
    pub full_name_en: &'static str,
    pub dob: &'static str,
    pub dob_ad: &'static str,
    pub gender: &'static str,
    pub male: &'static str,
    pub female: &'static str,
    pub others: &'static str,
    pub occupation: &'static str,
    pub perm_address: &'static str,
    pub temp_address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub doc_type: &'static str,
    pub doc_issued: &'static str,
    pub upload: &'static str,
    pub education: &'static str,
    pub job_title: &'static str,
    pub experience_years: &'static str,
    pub skills: &'static str,
    pub org_name: &'static str,
    pub membership_type: &'static str,
    pub father: &'static str,
    pub mother: &'static str,
    pub spouse: &'static str,
    pub children: &'static str,
    pub em_name: &'static str,
    pub em_relation: &'static str,
    pub em_phone: &'static str,
    pub em_address: &'static str,
    pub pay_method: &'static str,
    pub transaction_id: &'static str,
    pub payment_file: &'static str,
    pub agree: &'static str,
    pub submit: &'static str,
}

/// One complete language pack.
#[derive(Debug, Serialize)]
pub struct Labels {
    pub lang_name: &'static str,
    pub take_membership: &'static str,
    pub sections: Sections,
    pub fields: Fields,
    pub doc_types: [&'static str; 6],
    pub education_opts: [&'static str; 6],
    pub membership_opts: [&'static str; 3],
    pub payment_opts: [&'static str; 4],
    pub success: &'static str,
    pub next: &'static str,
    pub prev: &'static str,
    pub save: &'static str,
    pub finish: &'static str,
}

/// Look up the label pack for a language.
pub fn labels(lang: Lang) -> &'static Labels {
    match lang {
        Lang::En => &EN,
        Lang::Ne => &NE,
        Lang::Ji => &JI,
    }
}

static EN: Labels = Labels {
    lang_name: "English",
    take_membership: "Take Membership",
    sections: Sections {
        language: "Choose Language",
        member_info: "Member Information",
        contact: "Contact Details",
        gov_doc: "Government Document Upload",
        education: "Educational Qualification",
        professional: "Professional Skills / Expertise",
        membership: "Membership Type",
        family: "Family Information",
        emergency: "Emergency Contact Person",
        payment: "Membership Payment",
        declaration: "Declaration",
        review: "Review & Submit",
    },
    fields: Fields {
        name: "Name",
        full_name_en: "Full Name in English",
        dob: "Date of Birth (B.S.)",
        dob_ad: "Date of Birth (A.D.)",
        gender: "Gender",
        male: "Male",
        female: "Female",
        others: "Others",
        occupation: "Occupation",
        perm_address: "Permanent Address",
        temp_address: "Temporary Address",
        phone: "Phone Number",
        email: "Email",
        doc_type: "Document Type",
        doc_issued: "Issued Date",
        upload: "Upload File",
        education: "Education Level",
        job_title: "Current Job Title / Position",
        experience_years: "Years of Work Experience",
        skills: "Special Skills",
        org_name: "Organization / Company Name",
        membership_type: "Select Membership Type",
        father: "Father's Name",
        mother: "Mother's Name",
        spouse: "Spouse Name",
        children: "Children (Number / Names)",
        em_name: "Name",
        em_relation: "Relationship",
        em_phone: "Phone Number",
        em_address: "Address",
        pay_method: "Payment Method",
        transaction_id: "Transaction ID",
        payment_file: "Upload Payment Proof",
        agree: "I hereby declare that all information provided is true to the best of my knowledge.",
        submit: "Submit",
    },
    doc_types: [
        "Citizenship",
        "Driving License",
        "PAN Card",
        "Voter ID",
        "National ID",
        "Passport",
    ],
    education_opts: ["Literate", "SLC / SEE", "10+2", "Bachelors", "Masters", "PhD"],
    membership_opts: ["General Member", "Life Member", "Honorary Member"],
    payment_opts: ["eSewa", "Khalti", "ConnectIPS", "Bank Transfer"],
    success: "Thank you for registering as a member of Jirel Association Nepal.",
    next: "Next",
    prev: "Previous",
    save: "Save & Continue",
    finish: "Finish",
};

static NE: Labels = Labels {
    lang_name: "नेपाली",
    take_membership: "सदस्यता लिनुहोस्",
    sections: Sections {
        language: "भाषा छान्नुहोस्",
        member_info: "सदस्यको विवरण",
        contact: "सम्पर्क विवरण",
        gov_doc: "सरकारी प्रमाणपत्र अपलोड",
        education: "शैक्षिक योग्यता",
        professional: "व्यावसायिक सीप / दक्षता",
        membership: "सदस्यता प्रकार",
        family: "परिवार विवरण",
        emergency: "आपतकालीन सम्पर्क व्यक्ति",
        payment: "सदस्यता भुक्तानी",
        declaration: "घोषणा",
        review: "समिक्षा र पेश गर्नुहोस्",
    },
    fields: Fields {
        name: "नाम",
        full_name_en: "अंग्रेजीमा पूरा नाम",
        dob: "जन्म मिति (वि.सं.)",
        dob_ad: "जन्म मिति (ई.सं.)",
        gender: "लिङ्ग",
        male: "पुरुष",
        female: "महिला",
        others: "अन्य",
        occupation: "पेशा",
        perm_address: "स्थायी ठेगाना",
        temp_address: "अस्थायी ठेगाना",
        phone: "फोन नं.",
        email: "इमेल",
        doc_type: "कागजातको प्रकार",
        doc_issued: "जारि मिति",
        upload: "फाइल अपलोड",
        education: "शैक्षिक स्तर",
        job_title: "हालको पद / पदनाम",
        experience_years: "कामको अनुभव (वर्ष)",
        skills: "विशेष सीप",
        org_name: "संस्था / कम्पनीको नाम",
        membership_type: "सदस्यता प्रकार छान्नुहोस्",
        father: "बाबुको नाम",
        mother: "आमाको नाम",
        spouse: "पति/पत्नीको नाम",
        children: "सन्तान (संख्या / नाम)",
        em_name: "नाम",
        em_relation: "सम्बन्ध",
        em_phone: "फोन नं.",
        em_address: "ठेगाना",
        pay_method: "भुक्तानी विधि",
        transaction_id: "ट्रान्ज्याक्सन आईडी",
        payment_file: "भुक्तानी प्रमाण अपलोड",
        agree: "मैले दिएको सम्पूर्ण जानकारी मेरो जानकारी अनुसार सत्य हो भन्ने म घोषणा गर्दछु।",
        submit: "पेश गर्नुहोस्",
    },
    doc_types: [
        "नागरिकता",
        "सवारी चालक अनुमतिपत्र",
        "पान कार्ड",
        "मतदाता परिचयपत्र",
        "रास्ट्रिय परिचयपत्र",
        "पासपोर्ट",
    ],
    education_opts: [
        "साधारण लेखपढ",
        "SLC / SEE",
        "१०+२",
        "स्नातक",
        "स्नातकोत्तर",
        "पिएचडी",
    ],
    membership_opts: ["साधारण सदस्य", "आजीवन सदस्य", "मानार्थ सदस्य"],
    payment_opts: ["इसेवा", "खल्ती", "कनेक्टआईपीएस", "बैंक ट्रान्सफर"],
    success: "जिरेल संघ नेपालको सदस्य बन्नु भएकोमा धन्यवाद।",
    next: "अर्को",
    prev: "अघिल्लो",
    save: "सेभ गरी अघि बढ्नुहोस्",
    finish: "समाप्त",
};

static JI: Labels = Labels {
    lang_name: "जिरेल",
    take_membership: "सदस्यता लोङ्ग",
    sections: Sections {
        language: "भाषा चुन",
        member_info: "सदस्यते विवरण",
        contact: "सम्पर्क विवरण",
        gov_doc: "सरकारी प्रमाणपत्र अपलोड",
        education: "शैक्षिक थ्योबो",
        professional: "व्यावसायिक सीप",
        membership: "सदस्यते प्रकार",
        family: "परिवार विवरण",
        emergency: "आपतकालीन सम्पर्क व्यक्ति",
        payment: "सदस्यता भुक्तानी",
        declaration: "घोषणा",
        review: "हेलाइ र पेश लोङ्ग",
    },
    fields: Fields {
        name: "म्यिन",
        full_name_en: "अंग्रेजीला पूरा म्यिन",
        dob: "केबाते मिति (वि.सं.)",
        dob_ad: "केबाते मिति (ई.सं.)",
        gender: "लिङ्ग",
        male: "ख्योबो म्यी",
        female: "फेम्बे म्यी",
        others: "जेन",
        occupation: "पेशा",
        perm_address: "स्थायी थलो",
        temp_address: "अस्थायी थलो",
        phone: "फोन नं.",
        email: "इमेल",
        doc_type: "कागजात प्रकार",
        doc_issued: "जारी खाबते मिति",
        upload: "फाइल अपलोड",
        education: "शैक्षिक स्तर",
        job_title: "हालको पद",
        experience_years: "काम अनुभव (वर्ष)",
        skills: "विशेष सीप",
        org_name: "संस्था / कम्पनी",
        membership_type: "सदस्यते प्रकार छान्नुहोस्",
        father: "बुबा म्यिन",
        mother: "आमा म्यिन",
        spouse: "जोडी म्यिन",
        children: "सन्तान (संख्या / नाम)",
        em_name: "म्यिन",
        em_relation: "सम्बन्ध",
        em_phone: "फोन नं.",
        em_address: "ठेगाना",
        pay_method: "भुक्तानी विधि",
        transaction_id: "लेनदेन आईडी",
        payment_file: "भुक्तानी प्रमाण अपलोड",
        agree: "ङा दिआ जानकारी सारा सत्य बा थोक मा घोषणा लाङ।",
        submit: "पेश लोङ्ग",
    },
    doc_types: [
        "नागरिकता",
        "सवारी चालक अनुमतिपत्र",
        "पान कार्ड",
        "मतदाता परिचयपत्र",
        "रास्ट्रिय परिचयपत्र",
        "पासपोर्ट",
    ],
    education_opts: [
        "साधारण लेखापढी",
        "SLC / SEE",
        "१०+२",
        "स्नातक",
        "स्नातकोत्तर",
        "पिएचडी",
    ],
    membership_opts: ["साधारण सदस्य", "आजीवन सदस्य", "मानार्थ सदस्य"],
    payment_opts: ["इसेवा", "खल्ती", "कनेक्टआईपीएस", "बैंक ट्रान्सफर"],
    success: "जिरेल संघ नेपाल ला धन्यवाद।",
    next: "अगाडि",
    prev: "पाछाडि",
    save: "सेभ करी अघि जाम",
    finish: "समाप्त",
};
