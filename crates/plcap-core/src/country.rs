//! ISO 3166-1 alpha-2 lookup for the registry's `country` field.

/// A country the registry accepts, keyed by its alpha-2 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub alpha_2: &'static str,
}

/// Informal spellings that show up at the tail of scraped addresses.
const ALIASES: &[(&str, &str)] = &[
    ("USA", "US"),
    ("U.S.A.", "US"),
    ("U.S.", "US"),
    ("UNITED STATES OF AMERICA", "US"),
    ("UK", "GB"),
    ("GREAT BRITAIN", "GB"),
    ("ENGLAND", "GB"),
    ("CZECHIA", "CZ"),
    ("TURKIYE", "TR"),
];

pub const COUNTRIES: &[Country] = &[
    Country { name: "Afghanistan", alpha_2: "AF" },
    Country { name: "Albania", alpha_2: "AL" },
    Country { name: "Algeria", alpha_2: "DZ" },
    Country { name: "Andorra", alpha_2: "AD" },
    Country { name: "Angola", alpha_2: "AO" },
    Country { name: "Antigua and Barbuda", alpha_2: "AG" },
    Country { name: "Argentina", alpha_2: "AR" },
    Country { name: "Armenia", alpha_2: "AM" },
    Country { name: "Australia", alpha_2: "AU" },
    Country { name: "Austria", alpha_2: "AT" },
    Country { name: "Azerbaijan", alpha_2: "AZ" },
    Country { name: "Bahamas", alpha_2: "BS" },
    Country { name: "Bahrain", alpha_2: "BH" },
    Country { name: "Bangladesh", alpha_2: "BD" },
    Country { name: "Barbados", alpha_2: "BB" },
    Country { name: "Belarus", alpha_2: "BY" },
    Country { name: "Belgium", alpha_2: "BE" },
    Country { name: "Belize", alpha_2: "BZ" },
    Country { name: "Benin", alpha_2: "BJ" },
    Country { name: "Bhutan", alpha_2: "BT" },
    Country { name: "Bolivia", alpha_2: "BO" },
    Country { name: "Bosnia and Herzegovina", alpha_2: "BA" },
    Country { name: "Botswana", alpha_2: "BW" },
    Country { name: "Brazil", alpha_2: "BR" },
    Country { name: "Brunei", alpha_2: "BN" },
    Country { name: "Bulgaria", alpha_2: "BG" },
    Country { name: "Burkina Faso", alpha_2: "BF" },
    Country { name: "Burundi", alpha_2: "BI" },
    Country { name: "Cambodia", alpha_2: "KH" },
    Country { name: "Cameroon", alpha_2: "CM" },
    Country { name: "Canada", alpha_2: "CA" },
    Country { name: "Cape Verde", alpha_2: "CV" },
    Country { name: "Central African Republic", alpha_2: "CF" },
    Country { name: "Chad", alpha_2: "TD" },
    Country { name: "Chile", alpha_2: "CL" },
    Country { name: "China", alpha_2: "CN" },
    Country { name: "Colombia", alpha_2: "CO" },
    Country { name: "Comoros", alpha_2: "KM" },
    Country { name: "Congo", alpha_2: "CG" },
    Country { name: "Costa Rica", alpha_2: "CR" },
    Country { name: "Croatia", alpha_2: "HR" },
    Country { name: "Cuba", alpha_2: "CU" },
    Country { name: "Cyprus", alpha_2: "CY" },
    Country { name: "Czech Republic", alpha_2: "CZ" },
    Country { name: "Denmark", alpha_2: "DK" },
    Country { name: "Djibouti", alpha_2: "DJ" },
    Country { name: "Dominica", alpha_2: "DM" },
    Country { name: "Dominican Republic", alpha_2: "DO" },
    Country { name: "Ecuador", alpha_2: "EC" },
    Country { name: "Egypt", alpha_2: "EG" },
    Country { name: "El Salvador", alpha_2: "SV" },
    Country { name: "Equatorial Guinea", alpha_2: "GQ" },
    Country { name: "Eritrea", alpha_2: "ER" },
    Country { name: "Estonia", alpha_2: "EE" },
    Country { name: "Ethiopia", alpha_2: "ET" },
    Country { name: "Fiji", alpha_2: "FJ" },
    Country { name: "Finland", alpha_2: "FI" },
    Country { name: "France", alpha_2: "FR" },
    Country { name: "Gabon", alpha_2: "GA" },
    Country { name: "Gambia", alpha_2: "GM" },
    Country { name: "Georgia", alpha_2: "GE" },
    Country { name: "Germany", alpha_2: "DE" },
    Country { name: "Ghana", alpha_2: "GH" },
    Country { name: "Greece", alpha_2: "GR" },
    Country { name: "Grenada", alpha_2: "GD" },
    Country { name: "Guatemala", alpha_2: "GT" },
    Country { name: "Guinea", alpha_2: "GN" },
    Country { name: "Guinea-Bissau", alpha_2: "GW" },
    Country { name: "Guyana", alpha_2: "GY" },
    Country { name: "Haiti", alpha_2: "HT" },
    Country { name: "Honduras", alpha_2: "HN" },
    Country { name: "Hungary", alpha_2: "HU" },
    Country { name: "Iceland", alpha_2: "IS" },
    Country { name: "India", alpha_2: "IN" },
    Country { name: "Indonesia", alpha_2: "ID" },
    Country { name: "Iran", alpha_2: "IR" },
    Country { name: "Iraq", alpha_2: "IQ" },
    Country { name: "Ireland", alpha_2: "IE" },
    Country { name: "Israel", alpha_2: "IL" },
    Country { name: "Italy", alpha_2: "IT" },
    Country { name: "Jamaica", alpha_2: "JM" },
    Country { name: "Japan", alpha_2: "JP" },
    Country { name: "Jordan", alpha_2: "JO" },
    Country { name: "Kazakhstan", alpha_2: "KZ" },
    Country { name: "Kenya", alpha_2: "KE" },
    Country { name: "Kiribati", alpha_2: "KI" },
    Country { name: "North Korea", alpha_2: "KP" },
    Country { name: "South Korea", alpha_2: "KR" },
    Country { name: "Kuwait", alpha_2: "KW" },
    Country { name: "Kyrgyzstan", alpha_2: "KG" },
    Country { name: "Laos", alpha_2: "LA" },
    Country { name: "Latvia", alpha_2: "LV" },
    Country { name: "Lebanon", alpha_2: "LB" },
    Country { name: "Lesotho", alpha_2: "LS" },
    Country { name: "Liberia", alpha_2: "LR" },
    Country { name: "Libya", alpha_2: "LY" },
    Country { name: "Liechtenstein", alpha_2: "LI" },
    Country { name: "Lithuania", alpha_2: "LT" },
    Country { name: "Luxembourg", alpha_2: "LU" },
    Country { name: "Madagascar", alpha_2: "MG" },
    Country { name: "Malawi", alpha_2: "MW" },
    Country { name: "Malaysia", alpha_2: "MY" },
    Country { name: "Maldives", alpha_2: "MV" },
    Country { name: "Mali", alpha_2: "ML" },
    Country { name: "Malta", alpha_2: "MT" },
    Country { name: "Marshall Islands", alpha_2: "MH" },
    Country { name: "Mauritania", alpha_2: "MR" },
    Country { name: "Mauritius", alpha_2: "MU" },
    Country { name: "Mexico", alpha_2: "MX" },
    Country { name: "Micronesia", alpha_2: "FM" },
    Country { name: "Moldova", alpha_2: "MD" },
    Country { name: "Monaco", alpha_2: "MC" },
    Country { name: "Mongolia", alpha_2: "MN" },
    Country { name: "Montenegro", alpha_2: "ME" },
    Country { name: "Morocco", alpha_2: "MA" },
    Country { name: "Mozambique", alpha_2: "MZ" },
    Country { name: "Myanmar", alpha_2: "MM" },
    Country { name: "Namibia", alpha_2: "NA" },
    Country { name: "Nauru", alpha_2: "NR" },
    Country { name: "Nepal", alpha_2: "NP" },
    Country { name: "Netherlands", alpha_2: "NL" },
    Country { name: "New Zealand", alpha_2: "NZ" },
    Country { name: "Nicaragua", alpha_2: "NI" },
    Country { name: "Niger", alpha_2: "NE" },
    Country { name: "Nigeria", alpha_2: "NG" },
    Country { name: "North Macedonia", alpha_2: "MK" },
    Country { name: "Norway", alpha_2: "NO" },
    Country { name: "Oman", alpha_2: "OM" },
    Country { name: "Pakistan", alpha_2: "PK" },
    Country { name: "Palau", alpha_2: "PW" },
    Country { name: "Palestine", alpha_2: "PS" },
    Country { name: "Panama", alpha_2: "PA" },
    Country { name: "Papua New Guinea", alpha_2: "PG" },
    Country { name: "Paraguay", alpha_2: "PY" },
    Country { name: "Peru", alpha_2: "PE" },
    Country { name: "Philippines", alpha_2: "PH" },
    Country { name: "Poland", alpha_2: "PL" },
    Country { name: "Portugal", alpha_2: "PT" },
    Country { name: "Qatar", alpha_2: "QA" },
    Country { name: "Romania", alpha_2: "RO" },
    Country { name: "Russia", alpha_2: "RU" },
    Country { name: "Rwanda", alpha_2: "RW" },
    Country { name: "Saint Kitts and Nevis", alpha_2: "KN" },
    Country { name: "Saint Lucia", alpha_2: "LC" },
    Country { name: "Saint Vincent and the Grenadines", alpha_2: "VC" },
    Country { name: "Samoa", alpha_2: "WS" },
    Country { name: "San Marino", alpha_2: "SM" },
    Country { name: "Sao Tome and Principe", alpha_2: "ST" },
    Country { name: "Saudi Arabia", alpha_2: "SA" },
    Country { name: "Senegal", alpha_2: "SN" },
    Country { name: "Serbia", alpha_2: "RS" },
    Country { name: "Seychelles", alpha_2: "SC" },
    Country { name: "Sierra Leone", alpha_2: "SL" },
    Country { name: "Singapore", alpha_2: "SG" },
    Country { name: "Slovakia", alpha_2: "SK" },
    Country { name: "Slovenia", alpha_2: "SI" },
    Country { name: "Solomon Islands", alpha_2: "SB" },
    Country { name: "Somalia", alpha_2: "SO" },
    Country { name: "South Africa", alpha_2: "ZA" },
    Country { name: "South Sudan", alpha_2: "SS" },
    Country { name: "Spain", alpha_2: "ES" },
    Country { name: "Sri Lanka", alpha_2: "LK" },
    Country { name: "Sudan", alpha_2: "SD" },
    Country { name: "Suriname", alpha_2: "SR" },
    Country { name: "Sweden", alpha_2: "SE" },
    Country { name: "Switzerland", alpha_2: "CH" },
    Country { name: "Syria", alpha_2: "SY" },
    Country { name: "Taiwan", alpha_2: "TW" },
    Country { name: "Tajikistan", alpha_2: "TJ" },
    Country { name: "Tanzania", alpha_2: "TZ" },
    Country { name: "Thailand", alpha_2: "TH" },
    Country { name: "Timor-Leste", alpha_2: "TL" },
    Country { name: "Togo", alpha_2: "TG" },
    Country { name: "Tonga", alpha_2: "TO" },
    Country { name: "Trinidad and Tobago", alpha_2: "TT" },
    Country { name: "Tunisia", alpha_2: "TN" },
    Country { name: "Turkey", alpha_2: "TR" },
    Country { name: "Turkmenistan", alpha_2: "TM" },
    Country { name: "Tuvalu", alpha_2: "TV" },
    Country { name: "Uganda", alpha_2: "UG" },
    Country { name: "Ukraine", alpha_2: "UA" },
    Country { name: "United Arab Emirates", alpha_2: "AE" },
    Country { name: "United Kingdom", alpha_2: "GB" },
    Country { name: "United States", alpha_2: "US" },
    Country { name: "Uruguay", alpha_2: "UY" },
    Country { name: "Uzbekistan", alpha_2: "UZ" },
    Country { name: "Vanuatu", alpha_2: "VU" },
    Country { name: "Vatican City", alpha_2: "VA" },
    Country { name: "Venezuela", alpha_2: "VE" },
    Country { name: "Vietnam", alpha_2: "VN" },
    Country { name: "Yemen", alpha_2: "YE" },
    Country { name: "Zambia", alpha_2: "ZM" },
    Country { name: "Zimbabwe", alpha_2: "ZW" },
];

/// Resolve free-form country input to an alpha-2 code.
///
/// Accepts a two-letter code in any case, a full country name
/// (case-insensitive), or one of a handful of common aliases such as `USA`
/// and `UK`. Returns `None` when nothing matches.
#[must_use]
pub fn resolve_country_code(input: &str) -> Option<&'static str> {
    let upper = input.trim().to_uppercase();
    if upper.is_empty() {
        return None;
    }

    if upper.len() == 2 {
        if let Some(country) = COUNTRIES.iter().find(|c| c.alpha_2 == upper) {
            return Some(country.alpha_2);
        }
    }

    if let Some(country) = COUNTRIES.iter().find(|c| c.name.to_uppercase() == upper) {
        return Some(country.alpha_2);
    }

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map(|(_, code)| *code)
}

/// Display name for an alpha-2 code.
#[must_use]
pub fn country_name(alpha_2: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|c| c.alpha_2.eq_ignore_ascii_case(alpha_2))
        .map(|c| c.name)
}
