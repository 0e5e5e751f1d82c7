//! Name Generation for Clients
//!
//! Brazilian Portuguese name tables, company name formats and the
//! honorific cleaner applied to generated person names.

use rand::seq::SliceRandom;
use rand::Rng;

/// Honorifics stripped by [`clean_name`], tried in this exact order.
pub const NAME_PREFIXES: &[&str] = &["Sr.", "Sra.", "Srta.", "Dr.", "Dra.", "Sr", "Sra", "Dr", "Dra"];

const MALE_PREFIXES: &[&str] = &["Sr.", "Dr."];
const FEMALE_PREFIXES: &[&str] = &["Sra.", "Srta.", "Dra."];

/// Chance that a generated person name carries an honorific
const PREFIX_PROBABILITY: f64 = 0.1;

/// Chance of a second surname
const DOUBLE_SURNAME_PROBABILITY: f64 = 0.4;

/// Common first names for males
const MALE_FIRST_NAMES: &[&str] = &[
    "Alexandre", "André", "Antônio", "Arthur", "Benjamin", "Bernardo", "Bruno", "Caio",
    "Carlos", "Cauã", "Daniel", "Davi", "Diego", "Eduardo", "Enzo", "Felipe",
    "Fernando", "Francisco", "Gabriel", "Guilherme", "Gustavo", "Heitor", "Henrique",
    "Igor", "Isaac", "João", "Joaquim", "José", "Kaique", "Leonardo", "Lorenzo",
    "Lucas", "Luiz", "Marcelo", "Marcos", "Matheus", "Miguel", "Murilo", "Nicolas",
    "Otávio", "Paulo", "Pedro", "Rafael", "Raul", "Ricardo", "Rodrigo", "Samuel",
    "Thiago", "Vicente", "Vinícius", "Vitor", "Yuri",
];

/// Common first names for females
const FEMALE_FIRST_NAMES: &[&str] = &[
    "Alice", "Amanda", "Ana", "Beatriz", "Bianca", "Bruna", "Camila", "Carolina",
    "Cecília", "Clara", "Daniela", "Eduarda", "Elisa", "Emanuelly", "Fernanda",
    "Gabriela", "Giovanna", "Helena", "Isabela", "Isadora", "Jéssica", "Júlia",
    "Larissa", "Laura", "Letícia", "Lívia", "Lorena", "Luana", "Luiza", "Manuela",
    "Mariana", "Maria", "Melissa", "Natália", "Nicole", "Olívia", "Patrícia",
    "Rafaela", "Rebeca", "Sabrina", "Sophia", "Stella", "Tatiane", "Valentina",
    "Vitória", "Yasmin",
];

/// Common last names
const LAST_NAMES: &[&str] = &[
    "Almeida", "Alves", "Araújo", "Barbosa", "Barros", "Cardoso", "Carvalho", "Castro",
    "Cavalcanti", "Correia", "Costa", "Cunha", "Dias", "Duarte", "Farias", "Fernandes",
    "Ferreira", "Fogaça", "Freitas", "Gomes", "Gonçalves", "Lima", "Lopes", "Martins",
    "Melo", "Mendes", "Monteiro", "Moraes", "Moreira", "Moura", "Nascimento", "Nogueira",
    "Nunes", "Oliveira", "Peixoto", "Pereira", "Pinto", "Pires", "Porto", "Ramos",
    "Rezende", "Ribeiro", "Rocha", "Rodrigues", "Sales", "Santos", "Silva", "Siqueira",
    "Souza", "Teixeira", "Vieira",
];

/// Legal-form endings used by company name formats
const COMPANY_SUFFIXES: &[&str] = &["S/A", "S.A.", "Ltda.", "- ME", "- EI", "e Filhos"];

/// Strip honorific prefixes from a full name.
///
/// Every entry of [`NAME_PREFIXES`] is checked once, in order, against the
/// current working string; a match is removed and the remainder trimmed
/// before the next entry is checked.
pub fn clean_name(name: &str) -> String {
    let mut name = name;
    for prefix in NAME_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            name = rest.trim();
        }
    }
    name.to_string()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, table: &[&'static str]) -> &'static str {
    // Tables are non-empty constants
    table.choose(rng).copied().unwrap_or_default()
}

/// Generate a random first name based on sex
pub fn random_first_name<R: Rng + ?Sized>(rng: &mut R, is_male: bool) -> &'static str {
    if is_male {
        pick(rng, MALE_FIRST_NAMES)
    } else {
        pick(rng, FEMALE_FIRST_NAMES)
    }
}

/// Generate a random last name
pub fn random_last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, LAST_NAMES)
}

/// Full person name, occasionally led by an honorific.
pub fn random_full_name<R: Rng + ?Sized>(rng: &mut R, is_male: bool) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(4);
    if rng.gen_bool(PREFIX_PROBABILITY) {
        parts.push(pick(rng, if is_male { MALE_PREFIXES } else { FEMALE_PREFIXES }));
    }
    parts.push(random_first_name(rng, is_male));
    parts.push(random_last_name(rng));
    if rng.gen_bool(DOUBLE_SURNAME_PROBABILITY) {
        parts.push(random_last_name(rng));
    }
    parts.join(" ")
}

/// Company display name built from surnames; may or may not end in a legal form.
pub fn random_company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..5) {
        0 => format!("{} {}", random_last_name(rng), pick(rng, COMPANY_SUFFIXES)),
        1 => format!(
            "{} {} {}",
            random_last_name(rng),
            random_last_name(rng),
            pick(rng, COMPANY_SUFFIXES)
        ),
        2 => random_last_name(rng).to_string(),
        3 => format!("{} - {}", random_last_name(rng), random_last_name(rng)),
        _ => format!("{} e {}", random_last_name(rng), random_last_name(rng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_clean_name_strips_each_prefix() {
        assert_eq!(clean_name("Sr. João Silva"), "João Silva");
        assert_eq!(clean_name("Sra. Ana Costa"), "Ana Costa");
        assert_eq!(clean_name("Srta. Clara Lima"), "Clara Lima");
        assert_eq!(clean_name("Dr. Pedro Rocha"), "Pedro Rocha");
        assert_eq!(clean_name("Dra. Helena Souza"), "Helena Souza");
    }

    #[test]
    fn test_clean_name_without_period() {
        assert_eq!(clean_name("Sr Paulo Dias"), "Paulo Dias");
        assert_eq!(clean_name("Dr Caio Nunes"), "Caio Nunes");
    }

    #[test]
    fn test_clean_name_bare_short_prefix_matches_first() {
        // Bare "Sr"/"Dr" come before "Sra"/"Dra" in the list and leave the "a" behind
        assert_eq!(clean_name("Sra Laura Melo"), "a Laura Melo");
        assert_eq!(clean_name("Dra Bruna Pires"), "a Bruna Pires");
    }

    #[test]
    fn test_clean_name_period_variant_wins_over_bare() {
        // "Dra." is reached before the bare "Dr", so the period goes with it
        assert_eq!(clean_name("Dra. Lívia Porto"), "Lívia Porto");
        assert_eq!(clean_name("Srta. Maria"), "Maria");
    }

    #[test]
    fn test_clean_name_unprefixed_is_unchanged() {
        assert_eq!(clean_name("Beatriz Almeida"), "Beatriz Almeida");
        assert_eq!(clean_name("  Ana  "), "  Ana  ");
        assert_eq!(clean_name(""), "");
    }

    #[test]
    fn test_clean_name_prefix_only() {
        assert_eq!(clean_name("Dr."), "");
        assert_eq!(clean_name("Sra.   "), "");
    }

    #[test]
    fn test_name_generation() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = random_first_name(&mut rng, true);
        assert!(MALE_FIRST_NAMES.contains(&first));

        let first = random_first_name(&mut rng, false);
        assert!(FEMALE_FIRST_NAMES.contains(&first));

        let last = random_last_name(&mut rng);
        assert!(LAST_NAMES.contains(&last));
    }

    #[test]
    fn test_tables_survive_cleaning() {
        // No table entry may look like an honorific to the cleaner
        for name in MALE_FIRST_NAMES.iter().chain(FEMALE_FIRST_NAMES).chain(LAST_NAMES) {
            assert_eq!(clean_name(name), *name);
        }
    }

    #[test]
    fn test_full_names_clean_to_table_words() {
        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..500 {
            let is_male = i % 2 == 0;
            let cleaned = clean_name(&random_full_name(&mut rng, is_male));
            let words: Vec<&str> = cleaned.split(' ').collect();
            assert!(words.len() == 2 || words.len() == 3, "{cleaned}");
            let firsts = if is_male { MALE_FIRST_NAMES } else { FEMALE_FIRST_NAMES };
            assert!(firsts.contains(&words[0]), "{cleaned}");
            assert!(words[1..].iter().all(|w| LAST_NAMES.contains(w)), "{cleaned}");
        }
    }

    #[test]
    fn test_company_names_non_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let name = random_company_name(&mut rng);
            assert!(!name.trim().is_empty());
        }
    }
}
