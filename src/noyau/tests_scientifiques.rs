//! Tests scientifiques (campagne) : invariants numériques du pipeline complet.
//!
//! But : vérifier la précision sans faire chauffer la machine.
//! - budget temps global sur les boucles
//! - précisions bornées (≤ 120 chiffres)
//! - références indépendantes : série exacte en rationnels, développements connus

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};
use proptest::prelude::*;

use super::base12::{fraction_exacte, Chiffre12};
use super::{compute_pi, developper, evaluate, to_base12_fraction, Decimal};

/// π, 130 chiffres après la virgule.
const PI_130: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679821480865132823066470938446095";

/// π en base 12, 100 chiffres après la virgule.
const PI12_100: &str = "184809493B918664573A6211BB151551A05729290A7809A492742140A60A55256A0661A03753A3AA54805646880181A36830";

fn nz(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

fn en_rationnel(x: &Decimal) -> BigRational {
    BigRational::new(x.mantisse().clone(), pow10(x.echelle()))
}

fn ulp(n: u32) -> BigRational {
    BigRational::new(BigInt::one(), pow10(n))
}

fn pi_reference() -> BigRational {
    en_rationnel(&PI_130.parse().unwrap())
}

/// atan(1/x) en rationnel exact, tronqué quand le terme suivant passe sous 10^-precision.
fn atan_exact(x: u32, precision: u32) -> BigRational {
    let x = BigInt::from(x);
    let seuil = ulp(precision);

    let mut somme = BigRational::from_integer(BigInt::from(0));
    let mut x_pow = x.clone();
    let mut k: u32 = 0;
    loop {
        let terme = BigRational::new(BigInt::one(), &x_pow * BigInt::from(2 * k + 1));
        if terme < seuil {
            return somme;
        }
        if k % 2 == 0 {
            somme += terme;
        } else {
            somme -= terme;
        }
        x_pow = x_pow * &x * &x;
        k += 1;
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Série arctan ------------------------ */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Avec 5 chiffres de garde, l’écart à la valeur exacte reste sous une unité
    /// du dernier chiffre demandé.
    #[test]
    fn sci_atan_a_une_unite_pres(x in 2u32..5000, s in 1u32..80) {
        let approx = en_rationnel(&evaluate(x, s + 5).unwrap());
        let exact = atan_exact(x, s + 12);
        prop_assert!((approx - exact).abs() < ulp(s), "x={} s={}", x, s);
    }
}

#[test]
fn sci_atan_domaine() {
    assert!(evaluate(0, 10).is_err());
    assert!(evaluate(1, 10).is_err());
    assert!(evaluate(2, 10).is_ok());
}

/* ------------------------ π décimal ------------------------ */

#[test]
fn sci_pi_precision_monotone() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    // compute_pi(d) et compute_pi(d-1) ne diffèrent que dans les chiffres de garde
    let mut precedent = compute_pi(nz(1)).unwrap();
    for d in 2..=40u32 {
        let courant = compute_pi(nz(d)).unwrap();
        let ecart = (en_rationnel(&courant) - en_rationnel(&precedent)).abs();
        assert!(ecart < ulp(d - 1), "d={d} courant={courant} precedent={precedent}");
        precedent = courant;
        budget(t0, max);
    }
}

#[test]
fn sci_pi_contre_reference() {
    let reference = pi_reference();
    for d in [1u32, 10, 50, 120] {
        let pi = en_rationnel(&compute_pi(nz(d)).unwrap());
        assert!((pi - &reference).abs() < ulp(d), "d={d}");
    }
}

#[test]
fn sci_pi_idempotent() {
    let a = compute_pi(nz(80)).unwrap();
    let b = compute_pi(nz(80)).unwrap();
    assert_eq!((a.mantisse(), a.echelle()), (b.mantisse(), b.echelle()));
    assert_eq!(developper(nz(80)).unwrap(), developper(nz(80)).unwrap());
}

/* ------------------------ Base 12 ------------------------ */

#[test]
fn sci_base12_prefixe_connu() {
    // ⌊d·log₁₂(10)⌋ − 1 positions sont garanties
    for (d, sures) in [(5u32, 3usize), (20, 17), (50, 45), (100, 91)] {
        let s = developper(nz(d)).unwrap();
        let frac = s.strip_prefix("3.").unwrap_or_else(|| panic!("préfixe absent: {s}"));
        assert!(frac.len() >= sures, "d={d} s={s}");
        assert_eq!(&frac[..sures], &PI12_100[..sures], "d={d}");
    }
}

#[test]
fn sci_base12_aller_retour() {
    // Σ cᵢ·12^-i doit redonner π − 3 à la tolérance de la précision demandée
    let reference = pi_reference() - BigRational::from_integer(BigInt::from(3));
    for d in [5u32, 20, 60, 120] {
        let pi = compute_pi(nz(d)).unwrap();
        let chiffres: Vec<Chiffre12> = to_base12_fraction(&pi, nz(d)).unwrap().collect();
        let reconstruit = fraction_exacte(&chiffres);

        assert!((&reconstruit - &reference).abs() < ulp(d), "d={d}");

        // la conversion elle-même ne perd que la queue sous les gardes
        let frac_dec = en_rationnel(&pi) - BigRational::from_integer(BigInt::from(3));
        assert!((reconstruit - frac_dec).abs() < ulp(d + 4), "d={d}");
    }
}

#[test]
fn sci_base12_suite_finie_et_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for d in 1..=60u32 {
        let pi = compute_pi(nz(d)).unwrap();
        let it = to_base12_fraction(&pi, nz(d)).unwrap();
        let plafond = it.plafond();
        let n = it.count();
        assert!(n >= 1 && n <= plafond, "d={d} n={n} plafond={plafond}");
        budget(t0, max);
    }
}
