//! Brazilian taxpayer identifiers
//!
//! CPF (individuals) and CNPJ (organizations) with mod-11 check digits,
//! rendered in their usual punctuated form.

use rand::Rng;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Branch number used for every generated CNPJ (head office)
const CNPJ_BRANCH: [u8; 4] = [0, 0, 0, 1];

fn mod11_digit(digits: &[u8], weights: impl Iterator<Item = u32>) -> u8 {
    let sum: u32 = digits.iter().zip(weights).map(|(&d, w)| d as u32 * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Append the two CPF check digits to a 9-digit base.
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 11] {
    let mut digits = [0u8; 11];
    digits[..9].copy_from_slice(base);
    digits[9] = mod11_digit(&digits[..9], (2..=10).rev());
    digits[10] = mod11_digit(&digits[..10], (2..=11).rev());
    digits
}

/// Append the two CNPJ check digits to a 12-digit base.
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 14] {
    let mut digits = [0u8; 14];
    digits[..12].copy_from_slice(base);
    digits[12] = mod11_digit(&digits[..12], CNPJ_FIRST_WEIGHTS.into_iter());
    digits[13] = mod11_digit(&digits[..13], CNPJ_SECOND_WEIGHTS.into_iter());
    digits
}

fn render(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// `000.000.000-00`
pub fn format_cpf(digits: &[u8; 11]) -> String {
    format!(
        "{}.{}.{}-{}",
        render(&digits[0..3]),
        render(&digits[3..6]),
        render(&digits[6..9]),
        render(&digits[9..11])
    )
}

/// `00.000.000/0000-00`
pub fn format_cnpj(digits: &[u8; 14]) -> String {
    format!(
        "{}.{}.{}/{}-{}",
        render(&digits[0..2]),
        render(&digits[2..5]),
        render(&digits[5..8]),
        render(&digits[8..12]),
        render(&digits[12..14])
    )
}

pub fn random_cpf<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut base = [0u8; 9];
    for d in base.iter_mut() {
        *d = rng.gen_range(0..10);
    }
    format_cpf(&cpf_check_digits(&base))
}

pub fn random_cnpj<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut base = [0u8; 12];
    for d in base[..8].iter_mut() {
        *d = rng.gen_range(0..10);
    }
    base[8..].copy_from_slice(&CNPJ_BRANCH);
    format_cnpj(&cnpj_check_digits(&base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn digits_of(s: &str) -> Vec<u8> {
        s.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect()
    }

    #[test]
    fn test_known_cpf() {
        let digits = cpf_check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]);
        assert_eq!(format_cpf(&digits), "111.444.777-35");
    }

    #[test]
    fn test_known_cnpj() {
        let digits = cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]);
        assert_eq!(format_cnpj(&digits), "11.222.333/0001-81");
    }

    #[test]
    fn test_random_cpf_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let cpf = random_cpf(&mut rng);
            assert_eq!(cpf.len(), 14);
            assert_eq!(&cpf[3..4], ".");
            assert_eq!(&cpf[7..8], ".");
            assert_eq!(&cpf[11..12], "-");

            let digits = digits_of(&cpf);
            let base: [u8; 9] = digits[..9].try_into().unwrap();
            assert_eq!(cpf_check_digits(&base).to_vec(), digits);
        }
    }

    #[test]
    fn test_random_cnpj_shape() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let cnpj = random_cnpj(&mut rng);
            assert_eq!(cnpj.len(), 18);
            assert_eq!(&cnpj[10..16], "/0001-");

            let digits = digits_of(&cnpj);
            let base: [u8; 12] = digits[..12].try_into().unwrap();
            assert_eq!(cnpj_check_digits(&base).to_vec(), digits);
        }
    }
}
