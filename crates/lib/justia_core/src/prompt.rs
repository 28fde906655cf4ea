//! System prompt and per-request context for the AI provider.

use std::fmt::Write;

use crate::data::ReferenceData;
use crate::language::Language;

/// Directive used when the requested language code is not recognised.
pub const FALLBACK_DIRECTIVE: &str = "Respond in English.";

/// Fixed instructions sent with every provider request.
pub const SYSTEM_PROMPT: &str = r#"You are JUSTIA, an AI legal information assistant for India. You help ordinary citizens understand their legal rights and navigate the legal system.

CRITICAL RULES — follow these strictly:
1. You provide legal INFORMATION, never legal ADVICE. Always make this distinction clear.
2. Always end responses with: "⚠️ This is legal information, not legal advice. For binding legal counsel, consult a licensed advocate."
3. Cite the specific Indian law (Act name + Section) for every legal statement.
4. Keep language simple — assume user has 8th grade education. No jargon.
5. Always ask which STATE the user is in before giving specific information (laws vary by state).
6. If asked about urgent matters (domestic violence, criminal cases), immediately provide helpline numbers.
7. Never tell a user what they SHOULD do legally — only explain what the LAW SAYS and what OPTIONS EXIST.
8. Respond in the SAME LANGUAGE as the user's message (Hindi, Tamil, Telugu, Bengali, or English).

RESPONSE FORMAT:
- Use clear headings with emojis
- Bullet points for documents and steps
- Bold key legal terms
- Keep responses under 300 words unless user asks for detail

LEGAL DISCLAIMERS TO ADD:
- Consumer complaints → mention e-Daakhil portal (edaakhil.nic.in)
- Domestic violence → immediately give 181 helpline
- Labour disputes → mention free Labour Commissioner service
- Rental → mention Model Tenancy Act, 2021

You have access to state-specific legal information for all 28 Indian states."#;

/// Build the language directive plus state / case-type fact blocks.
///
/// Unknown ids are skipped so the model falls back to generic guidance.
pub fn build_context(
    data: &ReferenceData,
    state: Option<&str>,
    case_type: Option<&str>,
    language: &str,
) -> String {
    let directive = Language::from_code(language)
        .map(Language::directive)
        .unwrap_or(FALLBACK_DIRECTIVE);

    let mut context = format!("{directive}\n\n");

    if let Some(s) = state.and_then(|id| data.state(id).ok()) {
        // Writing into a String cannot fail.
        let _ = write!(
            context,
            "\nSTATE CONTEXT — {}:\n\
             - High Court: {}\n\
             - Rent Act: {}\n\
             - Legal Aid: {} | Helpline: {}\n\
             - Free legal aid income limit: ₹{}/year\n\
             - Consumer Forum: {}\n",
            s.name,
            s.high_court,
            s.rent_act,
            s.legal_aid_authority,
            s.legal_aid_phone,
            group_thousands(s.income_limit_legal_aid),
            s.consumer_forum,
        );
    }

    if let Some(ct) = case_type.and_then(|id| data.case_type(id).ok()) {
        let _ = write!(
            context,
            "\nCASE TYPE CONTEXT — {}:\n\
             - Primary Laws: {}\n\
             - Average resolution: {} days\n\
             - Success rate: {}%\n",
            ct.name,
            ct.primary_acts.join(", "),
            ct.avg_resolution_days,
            ct.success_rate_percent,
        );
    }

    context
}

/// Full system prompt for a request: fixed instructions, blank line, context.
pub fn system_prompt(context: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\n{context}")
}

/// `300000` -> `"300,000"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
