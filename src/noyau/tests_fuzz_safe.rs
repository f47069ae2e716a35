//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur avec des suites de jetons sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur des suites bornée
//! - budget temps global
//! - invariants clés vérifiés après CHAQUE jeton :
//!   * écran = "Error" ou nombre lisible
//!   * opérateur en attente => opérande gauche présent
//!   * erreur => ligne d’expression vide

use std::time::{Duration, Instant};

use super::jetons::{format_tokens, Operator, Token};
use super::moteur::{Engine, ERROR_DISPLAY};
use super::nombre::parse_operande;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de jetons (bornée) ------------------------ */

fn gen_token(rng: &mut Rng) -> Token {
    // chiffres majoritaires, sinon on ne construit jamais de vrais nombres
    match rng.pick(20) {
        0..=9 => Token::Digit(rng.pick(10) as u8),
        10 => Token::Digit(0),
        11 => Token::DecimalPoint,
        12 | 13 => Token::Operator(Operator::TOUS[rng.pick(4) as usize]),
        14 => Token::Operator(Operator::Div),
        15 | 16 => Token::Equals,
        17 => Token::ToggleSign,
        18 => Token::Backspace,
        _ => {
            // Clear rare : laisse le temps aux erreurs d’apparaître
            if rng.pick(3) == 0 {
                Token::Clear
            } else {
                Token::Digit(1)
            }
        }
    }
}

fn gen_suite(rng: &mut Rng, longueur: usize) -> Vec<Token> {
    (0..longueur).map(|_| gen_token(rng)).collect()
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(engine: &Engine, suite: &[Token]) {
    let ctx = || format_tokens(suite);
    let ecran = engine.display_text();
    let etat = engine.state();

    if ecran == ERROR_DISPLAY {
        assert!(etat.error().is_some(), "Error sans erreur: {}", ctx());
        assert!(engine.expression_text().is_empty(), "expression en erreur: {}", ctx());
    } else {
        assert!(
            parse_operande(&ecran).is_ok(),
            "écran illisible {ecran:?}: {}",
            ctx()
        );
        assert!(!ecran.starts_with("-0") || ecran.starts_with("-0."), "\"-0\" affiché: {}", ctx());
    }

    if etat.pending_operator().is_some() {
        assert!(etat.previous_operand().is_some(), "opérateur orphelin: {}", ctx());
    }

    assert!(
        etat.current_operand().matches('.').count() <= 1,
        "deux points: {}",
        ctx()
    );
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_par_jeton() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_err = 0usize;
    let mut seen_res = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let suite = gen_suite(&mut rng, 40);
        let mut engine = Engine::default();

        let mut vu_err = false;
        let mut vu_res = false;
        for (i, t) in suite.iter().enumerate() {
            engine.apply(*t);
            check_invariants(&engine, &suite[..=i]);
            vu_err |= engine.error().is_some();
            vu_res |= engine.state().just_evaluated();
        }

        seen_err += usize::from(vu_err);
        seen_res += usize::from(vu_res);
    }

    // On veut voir un mix, sinon le fuzz ne “balaye” rien.
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
    assert!(seen_res > 0, "aucun résultat vu: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // Même seed => mêmes suites => mêmes écrans
    let ecrans = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut out = Vec::new();
        for _ in 0..100 {
            budget(t0, max);
            let mut engine = Engine::default();
            engine.apply_all(gen_suite(&mut rng, 30));
            out.push((engine.display_text(), engine.expression_text()));
        }
        out
    };

    assert_eq!(ecrans(0xBADC0DE), ecrans(0xBADC0DE));
}

#[test]
fn fuzz_safe_clear_final_toujours_zero() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..150 {
        budget(t0, max);

        let mut engine = Engine::default();
        engine.apply_all(gen_suite(&mut rng, 25));
        engine.apply(Token::Clear);

        assert_eq!(engine.display_text(), "0");
        assert_eq!(engine.expression_text(), "");
        assert!(engine.error().is_none());
    }
}

#[test]
fn fuzz_safe_longue_chaine_anti_gel() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // 1 ÷ 7 × 7 ÷ 7 × 7 ... : la valeur exacte gauche ne doit pas exploser
    let mut engine = Engine::default();
    engine.apply(Token::Digit(1));
    for i in 0..400 {
        let op = if i % 2 == 0 { Operator::Div } else { Operator::Mul };
        engine.apply(Token::Operator(op));
        engine.apply(Token::Digit(7));
    }
    engine.apply(Token::Equals);
    budget(t0, max);

    assert_eq!(engine.display_text(), "1");
}
