//! Section titles and button labels per interface language

use crate::types::Language;

/// Labels for the profile screen in one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub profile: &'static str,
    pub personal_details: &'static str,
    pub security: &'static str,
    pub device_lock: &'static str,
    pub app_pin: &'static str,
    pub language: &'static str,
    pub addresses: &'static str,
    pub add_address: &'static str,
    pub cleanup: &'static str,
    pub logout: &'static str,
    pub edit: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub name: &'static str,
    pub phone: &'static str,
    pub saved_address: &'static str,
    pub saved_addresses: &'static str,
}

impl Strings {
    /// "1 saved address", "3 saved addresses"
    pub fn address_count(&self, count: usize) -> String {
        let noun = if count == 1 {
            self.saved_address
        } else {
            self.saved_addresses
        };
        format!("{} {}", count, noun)
    }
}

const ENGLISH: Strings = Strings {
    profile: "Profile",
    personal_details: "Personal details",
    security: "Security",
    device_lock: "Device lock",
    app_pin: "App PIN",
    language: "Language",
    addresses: "Saved addresses",
    add_address: "Add address",
    cleanup: "Clean up storage",
    logout: "Log out",
    edit: "Edit",
    save: "Save",
    cancel: "Cancel",
    name: "Name",
    phone: "Phone",
    saved_address: "saved address",
    saved_addresses: "saved addresses",
};

const HINDI: Strings = Strings {
    profile: "प्रोफ़ाइल",
    personal_details: "व्यक्तिगत विवरण",
    security: "सुरक्षा",
    device_lock: "डिवाइस लॉक",
    app_pin: "ऐप पिन",
    language: "भाषा",
    addresses: "सहेजे गए पते",
    add_address: "पता जोड़ें",
    cleanup: "स्टोरेज साफ़ करें",
    logout: "लॉग आउट",
    edit: "संपादित करें",
    save: "सहेजें",
    cancel: "रद्द करें",
    name: "नाम",
    phone: "फ़ोन",
    saved_address: "सहेजा गया पता",
    saved_addresses: "सहेजे गए पते",
};

const TAMIL: Strings = Strings {
    profile: "சுயவிவரம்",
    personal_details: "தனிப்பட்ட விவரங்கள்",
    security: "பாதுகாப்பு",
    device_lock: "சாதன பூட்டு",
    app_pin: "ஆப் பின்",
    language: "மொழி",
    addresses: "சேமித்த முகவரிகள்",
    add_address: "முகவரியைச் சேர்",
    cleanup: "சேமிப்பகத்தை சுத்தம் செய்",
    logout: "வெளியேறு",
    edit: "திருத்து",
    save: "சேமி",
    cancel: "ரத்து செய்",
    name: "பெயர்",
    phone: "தொலைபேசி",
    saved_address: "சேமித்த முகவரி",
    saved_addresses: "சேமித்த முகவரிகள்",
};

const TELUGU: Strings = Strings {
    profile: "ప్రొఫైల్",
    personal_details: "వ్యక్తిగత వివరాలు",
    security: "భద్రత",
    device_lock: "పరికర లాక్",
    app_pin: "యాప్ పిన్",
    language: "భాష",
    addresses: "సేవ్ చేసిన చిరునామాలు",
    add_address: "చిరునామా జోడించు",
    cleanup: "నిల్వను శుభ్రపరచు",
    logout: "లాగ్ అవుట్",
    edit: "సవరించు",
    save: "సేవ్ చేయి",
    cancel: "రద్దు చేయి",
    name: "పేరు",
    phone: "ఫోన్",
    saved_address: "సేవ్ చేసిన చిరునామా",
    saved_addresses: "సేవ్ చేసిన చిరునామాలు",
};

const BENGALI: Strings = Strings {
    profile: "প্রোফাইল",
    personal_details: "ব্যক্তিগত বিবরণ",
    security: "নিরাপত্তা",
    device_lock: "ডিভাইস লক",
    app_pin: "অ্যাপ পিন",
    language: "ভাষা",
    addresses: "সংরক্ষিত ঠিকানা",
    add_address: "ঠিকানা যোগ করুন",
    cleanup: "স্টোরেজ পরিষ্কার করুন",
    logout: "লগ আউট",
    edit: "সম্পাদনা",
    save: "সংরক্ষণ",
    cancel: "বাতিল",
    name: "নাম",
    phone: "ফোন",
    saved_address: "সংরক্ষিত ঠিকানা",
    saved_addresses: "সংরক্ষিত ঠিকানা",
};

impl Language {
    /// Labels for this language
    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::English => &ENGLISH,
            Language::Hindi => &HINDI,
            Language::Tamil => &TAMIL,
            Language::Telugu => &TELUGU,
            Language::Bengali => &BENGALI,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_distinct_titles() {
        for lang in Language::ALL {
            let s = lang.strings();
            assert!(!s.profile.is_empty());
            assert!(!s.logout.is_empty());
            if lang != Language::English {
                assert_ne!(s.security, ENGLISH.security, "{lang:?} falls back to English");
                assert_ne!(s.name, ENGLISH.name, "{lang:?} falls back to English");
            }
        }
    }

    #[test]
    fn test_address_count_is_pluralised() {
        let en = Language::English.strings();
        assert_eq!(en.address_count(0), "0 saved addresses");
        assert_eq!(en.address_count(1), "1 saved address");
        assert_eq!(en.address_count(2), "2 saved addresses");

        let hi = Language::Hindi.strings();
        assert_eq!(hi.address_count(1), "1 सहेजा गया पता");
    }
}
