/// Locales known for rendering workout dates. Anything else falls back to [Locale::EnUs].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    De,
    Fr,
    Es
}

const MONTHS_EN: [&str; 12] = ["January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"];
const MONTHS_DE: [&str; 12] = ["Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember"];
const MONTHS_FR: [&str; 12] = ["janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre"];
const MONTHS_ES: [&str; 12] = ["enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre"];

impl Locale {
    /// Parses tags such as "en-GB", "de_DE.UTF-8" or "fr". Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.split('.').next().unwrap_or_default().replace('_', "-").to_ascii_lowercase();
        let mut parts = tag.split('-');
        let language = parts.next().unwrap_or_default();
        let region = parts.next().unwrap_or_default();
        match (language, region) {
            ("en", "gb") | ("en", "ie") | ("en", "au") | ("en", "nz") => Some(Self::EnGb),
            ("en", _) => Some(Self::EnUs),
            ("de", _) => Some(Self::De),
            ("fr", _) => Some(Self::Fr),
            ("es", _) => Some(Self::Es),
            _ => None
        }
    }

    /// Like [Locale::from_tag], but never fails
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_default()
    }

    /// Long month name for a month in 1..=12
    pub fn month_name(&self, month: u8) -> &'static str {
        let names = match *self {
            Locale::EnUs | Locale::EnGb => &MONTHS_EN,
            Locale::De => &MONTHS_DE,
            Locale::Fr => &MONTHS_FR,
            Locale::Es => &MONTHS_ES
        };
        names[(month.clamp(1, 12) - 1) as usize]
    }

    /// Long month name with two-digit day, ordered as the locale expects
    pub fn month_day(&self, month: u8, day: u8) -> String {
        let name = self.month_name(month);
        match *self {
            Locale::EnUs => format!("{name} {day:02}"),
            Locale::EnGb | Locale::Fr => format!("{day:02} {name}"),
            Locale::De => format!("{day:02}. {name}"),
            Locale::Es => format!("{day:02} de {name}")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::locale::Locale;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::EnUs));
        assert_eq!(Locale::from_tag("en_GB.UTF-8"), Some(Locale::EnGb));
        assert_eq!(Locale::from_tag("de_DE.UTF-8"), Some(Locale::De));
        assert_eq!(Locale::from_tag("fr"), Some(Locale::Fr));
        assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("C"), None);
        assert_eq!(Locale::from_tag(""), None);
        assert_eq!(Locale::from_tag_or_default("ja-JP"), Locale::EnUs);
    }

    #[test]
    fn test_month_day() {
        assert_eq!(Locale::EnUs.month_day(4, 4), "April 04");
        assert_eq!(Locale::EnGb.month_day(4, 14), "14 April");
        assert_eq!(Locale::De.month_day(3, 1), "01. März");
        assert_eq!(Locale::Fr.month_day(8, 15), "15 août");
        assert_eq!(Locale::Es.month_day(12, 31), "31 de diciembre");
    }
}
