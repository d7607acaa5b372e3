// src/noyau/decimal.rs
//
// Décimal à échelle explicite (entier “scalé”)
// --------------------------------------------
// valeur = mantisse × 10^(-echelle)
// - add / sub / mul : exacts (jamais d’arrondi caché)
// - div            : échelle cible + mode d’arrondi TOUJOURS explicites
// - pow            : exact (échelle × n)
// - arrondir       : changement d’échelle avec mode explicite

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use super::erreur::{Erreur, Resultat};

/// Mode d’arrondi appliqué quand une division (ou un changement d’échelle) tronque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrondi {
    /// Au plus proche, égalité vers le chiffre pair (arrondi bancaire).
    DemiPair,
    /// Au plus proche, égalité en s’éloignant de zéro.
    DemiHaut,
    /// Troncature.
    VersZero,
}

#[derive(Clone, Debug)]
pub struct Decimal {
    mantisse: BigInt,
    echelle: u32,
}

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// num / den arrondi selon `mode` (quotient entier).
fn diviser_arrondi(num: &BigInt, den: &BigInt, mode: Arrondi) -> BigInt {
    let q = num / den;
    let r = num % den;
    if r.is_zero() {
        return q;
    }

    let double_r = r.abs() * 2u32;
    let den_abs = den.abs();

    let eloigner = match mode {
        Arrondi::VersZero => false,
        Arrondi::DemiHaut => double_r >= den_abs,
        Arrondi::DemiPair => match double_r.cmp(&den_abs) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => !(&q % BigInt::from(2)).is_zero(),
        },
    };

    if !eloigner {
        return q;
    }
    // le quotient exact est négatif ssi num et den sont de signes opposés
    if num.is_negative() != den.is_negative() {
        q - BigInt::one()
    } else {
        q + BigInt::one()
    }
}

impl Decimal {
    pub fn nouveau(mantisse: BigInt, echelle: u32) -> Self {
        Self { mantisse, echelle }
    }

    pub fn zero() -> Self {
        Self::nouveau(BigInt::zero(), 0)
    }

    pub fn un() -> Self {
        Self::nouveau(BigInt::one(), 0)
    }

    pub fn mantisse(&self) -> &BigInt {
        &self.mantisse
    }

    pub fn echelle(&self) -> u32 {
        self.echelle
    }

    pub fn is_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    pub fn est_negatif(&self) -> bool {
        self.mantisse.is_negative()
    }

    /// Mantisse ramenée à une échelle >= self.echelle (exact).
    fn mantisse_a(&self, echelle: u32) -> BigInt {
        debug_assert!(echelle >= self.echelle);
        &self.mantisse * pow10(echelle - self.echelle)
    }

    /// Partie entière (troncature vers zéro).
    pub fn partie_entiere(&self) -> BigInt {
        &self.mantisse / pow10(self.echelle)
    }

    /// Même valeur à une autre échelle ; arrondie selon `mode` si l’échelle diminue.
    pub fn arrondir(&self, echelle: u32, mode: Arrondi) -> Decimal {
        if echelle >= self.echelle {
            return Decimal::nouveau(self.mantisse_a(echelle), echelle);
        }
        let m = diviser_arrondi(&self.mantisse, &pow10(self.echelle - echelle), mode);
        Decimal::nouveau(m, echelle)
    }

    /// self / diviseur, résultat à `echelle` chiffres après la virgule.
    pub fn div(&self, diviseur: &Decimal, echelle: u32, mode: Arrondi) -> Resultat<Decimal> {
        if diviseur.is_zero() {
            return Err(Erreur::DivisionParZero);
        }

        // self/diviseur × 10^echelle = a·10^(echelle + sb - sa) / b
        let exp = i64::from(echelle) + i64::from(diviseur.echelle) - i64::from(self.echelle);
        let (num, den) = if exp >= 0 {
            (&self.mantisse * pow10(exp as u32), diviseur.mantisse.clone())
        } else {
            (self.mantisse.clone(), &diviseur.mantisse * pow10((-exp) as u32))
        };

        Ok(Decimal::nouveau(diviser_arrondi(&num, &den, mode), echelle))
    }

    /// Division par un entier non nul (infaillible).
    pub fn div_entier(&self, diviseur: NonZeroU32, echelle: u32, mode: Arrondi) -> Decimal {
        let d = BigInt::from(diviseur.get());
        let (num, den) = if echelle >= self.echelle {
            (self.mantisse_a(echelle), d)
        } else {
            (self.mantisse.clone(), d * pow10(self.echelle - echelle))
        };
        Decimal::nouveau(diviser_arrondi(&num, &den, mode), echelle)
    }

    /// Puissance entière exacte.
    pub fn pow(&self, n: u32) -> Decimal {
        Decimal::nouveau(self.mantisse.pow(n), self.echelle * n)
    }
}

/* ------------------------ Conversions ------------------------ */

impl From<BigInt> for Decimal {
    fn from(n: BigInt) -> Self {
        Decimal::nouveau(n, 0)
    }
}

impl From<u32> for Decimal {
    fn from(n: u32) -> Self {
        Decimal::from(BigInt::from(n))
    }
}

impl From<u64> for Decimal {
    fn from(n: u64) -> Self {
        Decimal::from(BigInt::from(n))
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Decimal::from(BigInt::from(n))
    }
}

/* ------------------------ Arithmétique exacte ------------------------ */

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        let e = self.echelle.max(rhs.echelle);
        Decimal::nouveau(self.mantisse_a(e) + rhs.mantisse_a(e), e)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        let e = self.echelle.max(rhs.echelle);
        Decimal::nouveau(self.mantisse_a(e) - rhs.mantisse_a(e), e)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        Decimal::nouveau(&self.mantisse * &rhs.mantisse, self.echelle + rhs.echelle)
    }
}

/* ------------------------ Comparaison (par valeur) ------------------------ */

// 1.0 == 1.00 : on compare les valeurs, pas les représentations.
// Pour une égalité “bit à bit”, comparer mantisse() et echelle().
impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let e = self.echelle.max(other.echelle);
        self.mantisse_a(e).cmp(&other.mantisse_a(e))
    }
}

/* ------------------------ Texte ------------------------ */

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neg = self.mantisse.is_negative();
        let abs = self.mantisse.abs();

        let scale = pow10(self.echelle);
        let int_part = &abs / &scale;
        let frac_part = &abs % &scale;

        let signe = if neg { "-" } else { "" };
        if self.echelle == 0 {
            return write!(f, "{signe}{int_part}");
        }

        let frac = frac_part.to_str_radix(10);
        let zeros = "0".repeat(self.echelle as usize - frac.len());
        write!(f, "{signe}{int_part}.{zeros}{frac}")
    }
}

impl FromStr for Decimal {
    type Err = Erreur;

    /// Accepte `[-]chiffres[.chiffres]` ; l’échelle est le nombre de chiffres après le point.
    fn from_str(s: &str) -> Resultat<Self> {
        let invalide = || Erreur::Litteral {
            texte: s.to_string(),
        };

        let t = s.trim();
        let (neg, corps) = match t.strip_prefix('-') {
            Some(reste) => (true, reste),
            None => (false, t),
        };

        let (ent, frac) = corps.split_once('.').unwrap_or((corps, ""));
        if ent.is_empty() && frac.is_empty() {
            return Err(invalide());
        }
        if !ent.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalide());
        }

        let chiffres = format!("{ent}{frac}");
        let mut mantisse = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
        if neg {
            mantisse = -mantisse;
        }
        let echelle = u32::try_from(frac.len()).map_err(|_| invalide())?;

        Ok(Decimal::nouveau(mantisse, echelle))
    }
}
