//! Pre-authored answers per topic and language.
//!
//! Not every topic is authored in every language; [`served_language`] decides
//! which text is used and falls back to English.

use crate::data::StateProfile;
use crate::language::Language;

use super::topic::Topic;

/// Languages with an authored template for `topic`.
pub fn authored(topic: Topic) -> &'static [Language] {
    use Language::*;
    match topic {
        Topic::Welcome => &[English, Hindi, Tamil, Telugu, Bengali],
        Topic::Rental => &[English, Hindi],
        Topic::Labour => &[English, Hindi],
        Topic::Consumer => &[English, Tamil],
        Topic::DomesticViolence => &[English, Hindi],
    }
}

/// The language the answer for `topic` will actually be written in.
pub fn served_language(topic: Topic, requested: Option<Language>) -> Language {
    requested
        .filter(|lang| authored(topic).contains(lang))
        .unwrap_or(Language::English)
}

pub fn welcome(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "Hello! I'm JUSTIA, your AI legal assistant for India. 🙏\n\nI can help you understand your legal rights in simple language — without expensive lawyers.\n\n**What legal issue are you facing today?**"
        }
        Language::Hindi => {
            "नमस्ते! मैं JUSTIA हूँ — आपका AI कानूनी सहायक। 🙏\n\nमैं आपको सरल भाषा में आपके कानूनी अधिकार समझाने में मदद कर सकता हूँ।\n\n**आज आपकी क्या समस्या है?**"
        }
        Language::Tamil => {
            "வணக்கம்! நான் JUSTIA — உங்கள் AI சட்ட உதவியாளர். 🙏\n\nநான் உங்கள் சட்ட உரிமைகளை எளிய மொழியில் விளக்க உதவுவேன்.\n\n**இன்று உங்கள் சட்ட சிக்கல் என்ன?**"
        }
        Language::Telugu => {
            "నమస్కారం! నేను JUSTIA — మీ AI న్యాయ సహాయకుడు. 🙏\n\nనేను మీ న్యాయ హక్కులను సరళమైన భాషలో వివరిస్తాను.\n\n**ఈరోజు మీ సమస్య ఏమిటి?**"
        }
        Language::Bengali => {
            "নমস্কার! আমি JUSTIA — আপনার AI আইনি সহকারী। 🙏\n\nআমি আপনার আইনি অধিকার সহজ ভাষায় বুঝতে সাহায্য করব।\n\n**আজ আপনার সমস্যা কী?**"
        }
    }
}

/// Rental answer, with the state's rent act spliced in when known.
pub fn rental(lang: Language, state: Option<&StateProfile>) -> String {
    let state_clause = state
        .map(|s| format!("\n\n**{} Specific Law:** {}", s.name, s.rent_act))
        .unwrap_or_default();

    match lang {
        Language::Hindi => format!(
            r#"🏠 **किराया जमा — आपके अधिकार**

**मॉडल टेनेंसी एक्ट, 2021** के अनुसार मकान मालिक को:
• घर खाली करने के **30 दिन** के अंदर जमा वापस करना होगा
• देरी पर **15% वार्षिक ब्याज** देना होगा{state_clause}

**📁 तुरंत इकट्ठा करें:**
• किराया समझौता (मूल)
• जमा भुगतान का प्रमाण
• घर खाली करने की सूचना

**🗺️ अगला कदम:**
**रजिस्टर्ड डाक** से मकान मालिक को 15 दिन का नोटिस भेजें।

⚠️ *यह कानूनी जानकारी है, कानूनी सलाह नहीं। बाध्यकारी परामर्श के लिए वकील से मिलें।*"#
        ),
        _ => format!(
            r#"🏠 **Rental Deposit — Your Rights**

Under the **Model Tenancy Act, 2021**, your landlord MUST:
• Return your deposit within **30 days** of you vacating
• Pay **15% annual interest** for every month of delay
• Not deduct for normal wear and tear{state_clause}

**📁 Documents to collect immediately:**
• Rent agreement (original)
• Deposit payment proof (bank transfer / receipt)
• Move-out notice (with delivery proof)
• Photos of property condition

**🗺️ Your next step:**
Send a **registered post legal notice** to your landlord demanding return within 15 days. Keep the tracking receipt.

⚠️ *This is legal information, not legal advice. Consult a licensed advocate for binding counsel.*"#
        ),
    }
}

pub fn labour(lang: Language) -> &'static str {
    match lang {
        Language::Hindi => {
            r#"👷 **श्रम / वेतन विवाद — आपके अधिकार**

**वेतन भुगतान अधिनियम, 1936** के अनुसार:
• वेतन अगले महीने की 7 तारीख तक देना अनिवार्य है
• बिना कारण वेतन काटना अवैध है

**🗺️ पहला कदम (मुफ्त):**
अपने **जिला श्रम आयुक्त** कार्यालय में शिकायत दर्ज करें — यह मुफ्त है।

⚠️ *यह कानूनी जानकारी है, कानूनी सलाह नहीं।*"#
        }
        _ => {
            r#"👷 **Labour / Wage Dispute — Your Rights**

Under the **Payment of Wages Act, 1936** and **Code on Wages, 2019**:
• Wages must be paid by **7th of next month** (for companies with 1000+ employees)
• Employer cannot deduct wages without written reason
• Wrongful termination requires **30-day notice** or equivalent pay

**📁 Documents needed:**
• Offer letter / appointment letter
• Salary slips (last 3 months)
• Bank statements showing salary credits
• Termination letter (if applicable)

**🗺️ First step (FREE):**
File a complaint with your **District Labour Commissioner** — it's free and often resolves in 45 days without going to court.

⚠️ *This is legal information, not legal advice.*"#
        }
    }
}

pub fn consumer(lang: Language) -> &'static str {
    match lang {
        Language::Tamil => {
            r#"🛒 **நுகர்வோர் புகார் — உங்கள் உரிமைகள்**

**நுகர்வோர் பாதுகாப்பு சட்டம், 2019** படி:
• குறைபாடுள்ள பொருட்கள் / மோசமான சேவைக்கு புகார் தாக்கல் செய்யலாம்
• **edaakhil.nic.in** இல் ஆன்லைனில் தாக்கல் செய்யலாம்

⚠️ *இது சட்ட தகவல், சட்ட ஆலோசனை அல்ல.*"#
        }
        _ => {
            r#"🛒 **Consumer Complaint — Your Rights**

Under the **Consumer Protection Act, 2019**:
• You can file a complaint for defective products, poor service, or unfair trade practices
• Online filing available at **edaakhil.nic.in** (no need to visit office)
• Companies must respond to complaints within **30 days** by law

**Jurisdiction:**
• Up to ₹50 lakhs → District Consumer Commission
• ₹50 lakhs – ₹2 crores → State Commission
• Above ₹2 crores → National Commission (NCDRC)

**🗺️ File online today:**
Visit **edaakhil.nic.in** — India's consumer complaint portal

⚠️ *This is legal information, not legal advice.*"#
        }
    }
}

/// Helplines first, then the statute.
pub fn domestic_violence(lang: Language) -> &'static str {
    match lang {
        Language::Hindi => {
            r#"🛡️ **घरेलू हिंसा — तत्काल सहायता**

**अभी कॉल करें:**
• **पुलिस: 100**
• **महिला हेल्पलाइन: 181** (24/7, मुफ्त)
• **NCW: 7827170170**

**घरेलू हिंसा अधिनियम, 2005** के तहत आपको सुरक्षा आदेश, निवास अधिकार और आर्थिक राहत मिल सकती है।

⚠️ *यह कानूनी जानकारी है, कानूनी सलाह नहीं। खतरे में हों तो तुरंत 100 पर कॉल करें।*"#
        }
        _ => {
            r#"🛡️ **Domestic Violence — Immediate Help**

**Emergency numbers — call NOW if you are in danger:**
• **Police Emergency: 100**
• **Women's Helpline: 181** (24/7, free, confidential)
• **NCW Helpline: 7827170170**

Under the **Protection of Women from Domestic Violence Act, 2005**, you have the right to:
• A Protection Order (stops abuser from contacting you)
• A Residence Order (right to stay in shared home)
• Monetary Relief
• Custody of children

**Your first step:**
Contact your district's **Protection Officer** — this service is completely FREE.

⚠️ *This is legal information, not legal advice. If you are in immediate danger, please call 100 immediately.*"#
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_is_authored_everywhere() {
        for lang in Language::ALL {
            assert_eq!(served_language(Topic::Welcome, Some(lang)), lang);
        }
    }

    #[test]
    fn missing_translation_serves_english() {
        assert_eq!(served_language(Topic::Rental, Some(Language::Tamil)), Language::English);
        assert_eq!(served_language(Topic::Consumer, Some(Language::Hindi)), Language::English);
        assert_eq!(served_language(Topic::Labour, None), Language::English);
    }

    #[test]
    fn authored_translation_is_served() {
        assert_eq!(served_language(Topic::Consumer, Some(Language::Tamil)), Language::Tamil);
        assert_eq!(
            served_language(Topic::DomesticViolence, Some(Language::Hindi)),
            Language::Hindi
        );
    }

    #[test]
    fn rental_without_state_has_no_clause() {
        let text = rental(Language::English, None);
        assert!(!text.contains("Specific Law"));
        assert!(text.contains("• Not deduct for normal wear and tear\n\n**📁 Documents"));
    }

    #[test]
    fn domestic_violence_leads_with_helplines() {
        for lang in [Language::English, Language::Hindi] {
            let text = domestic_violence(lang);
            let helpline = text.find("181").expect("helpline");
            let act = text.find("2005").expect("act");
            assert!(helpline < act, "{lang}: helplines must come first");
            assert!(text.contains("100"));
            assert!(text.contains("7827170170"));
        }
    }
}
