//! Locale-templated phrase assembly.
//!
//! Templates carry positional `{0}..{n}` placeholders and live in static
//! per-locale tables (`en`, `es`, `fr`). Lookup for any other locale code
//! falls back to `en` silently. Which template is used is itself a draw on
//! the caller's RNG, so the choice is covered by the same sub-seed as the
//! slot words.

use rand::Rng;

static TITLES_EN: &[&str] = &[
    "The {0} Century",
    "A History of {1}",
    "The Rise of {2}",
    "Chronicles of the {0} Era",
    "The {0} Revolution",
    "Ancient {1}: A {0} Perspective",
    "The Fall of the {0} Empire",
    "War and Peace in {1}",
    "The {0} Age of Discovery",
    "Empires of {3}",
    "The {1} Chronicles",
    "Legacy of the {0} Dynasty",
];

static TITLES_ES: &[&str] = &[
    "El siglo {0}",
    "Una historia de {1}",
    "El auge de {2}",
    "Crónicas de la era {0}",
    "La revolución {0}",
    "La antigua {1}: una perspectiva {0}",
    "La caída del imperio {0}",
    "Guerra y paz en {1}",
    "La era del descubrimiento {0}",
    "Imperios de {3}",
    "Las crónicas de {1}",
    "El legado de la dinastía {0}",
];

static TITLES_FR: &[&str] = &[
    "Le siècle {0}",
    "Une histoire de {1}",
    "L'essor de {2}",
    "Chroniques de l'ère {0}",
    "La révolution {0}",
    "{1} ancien : une perspective {0}",
    "La chute de l'empire {0}",
    "Guerre et paix à {1}",
    "L'âge des découvertes {0}",
    "Empires de {3}",
    "Les chroniques de {1}",
    "L'héritage de la dynastie {0}",
];

static REVIEWS_EN: &[&str] = &[
    "A {0} {1} by {2}, read {3}. Truly an unforgettable journey through {4}.",
    "Although the writing felt {0}, the story in this {1} by {2} kept me hooked {3}.",
    "I found this {1} while browsing {3}, and it surprised me with its {0} tone. {4} fans will enjoy it.",
    "The {1} crafted by {2} offers a {0} perspective on {4}. I read it {3}.",
    "While the pacing was somewhat {0}, the {1} by {2} left an impression {3} through its unique take on {4}.",
];

static REVIEWS_ES: &[&str] = &[
    "Una {1} {0} de {2}, leída {3}. Un viaje inolvidable por el mundo del {4}.",
    "Aunque la escritura se sintió algo {0}, la historia de esta {1} de {2} me atrapó desde {3}.",
    "Encontré esta {1} navegando {3} y me sorprendió con su tono {0}. Si te gusta el {4}, te gustará.",
    "La {1} creada por {2} ofrece una visión {0} sobre el género {4}. La leí {3}.",
    "A pesar de un ritmo algo {0}, la {1} de {2} me dejó huella {3} gracias a su enfoque sobre el {4}.",
];

static REVIEWS_FR: &[&str] = &[
    "Un(e) {1} {0} par {2}, lu(e) {3}. Un voyage inoubliable dans le monde du {4}.",
    "Bien que l'écriture soit un peu {0}, l'histoire de ce(tte) {1} par {2} m'a captivé(e) dès {3}.",
    "J'ai découvert ce(tte) {1} en flânant {3}, et son ton {0} m'a surpris(e). Les amateurs de {4} apprécieront.",
    "Le {1} écrit par {2} propose une vision {0} du genre {4}. Lu(e) {3}.",
    "Malgré un rythme un peu {0}, le {1} de {2} m'a laissé(e) une impression {3} avec son regard sur le {4}.",
];

/// Title templates for a locale, falling back to `en`.
pub fn title_templates(locale: &str) -> &'static [&'static str] {
    match locale {
        "es" => TITLES_ES,
        "fr" => TITLES_FR,
        _ => TITLES_EN,
    }
}

/// Review templates for a locale, falling back to `en`.
pub fn review_templates(locale: &str) -> &'static [&'static str] {
    match locale {
        "es" => REVIEWS_ES,
        "fr" => REVIEWS_FR,
        _ => REVIEWS_EN,
    }
}

/// Pick one template with the given RNG and fill its slots positionally.
pub fn render<R: Rng>(rng: &mut R, templates: &[&str], slots: &[&str]) -> String {
    let template = templates[rng.gen_range(0..templates.len())];
    fill(template, slots)
}

fn fill(template: &str, slots: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, slot) in slots.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), slot);
    }
    result
}
