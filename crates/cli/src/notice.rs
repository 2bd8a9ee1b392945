//! "Next delivery" notice sentence.

use dropday_schedule::{format_date, EarliestDelivery, Locale};

/// Sentence announcing the earliest delivery, or the generic fallback when
/// no date was found.
pub fn render(found: Option<&EarliestDelivery>, locale: Locale) -> String {
    match found {
        Some(found) => {
            let when = format_date(found.date, locale);
            match locale {
                Locale::En => format!("The next delivery in your area is on {when}."),
                Locale::Nl => format!("De volgende levering in uw regio is op {when}."),
                Locale::De => format!("Die nächste Lieferung in Ihrer Region ist am {when}."),
            }
        }
        None => fallback(locale).to_string(),
    }
}

fn fallback(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "We will contact you about the next delivery date.",
        Locale::Nl => "We nemen contact met u op over de volgende leverdatum.",
        Locale::De => "Wir informieren Sie über den nächsten Liefertermin.",
    }
}
