//! Noyau — moteur de la calculatrice à touches
//!
//! jeton -> `apply` -> EngineState -> `display_text`
//!
//! Contrats :
//! - `apply` ne panique pas et ne retourne jamais d’erreur : une erreur devient un ÉTAT
//!   (affichage "Error"), dont on sort par `Clear` ou un nouveau chiffre.
//! - Opérateurs enchaînés gauche -> droite, sans priorité (3 + 4 × 2 = 14).
//! - L’affichage se déduit de l’état seul.
//! - `Equals` répété sans nouvel opérande : aucun effet.

use num_rational::BigRational;
use num_traits::Zero;
use tracing::{debug, trace, warn};

use super::config::EngineConfig;
use super::erreurs::EngineError;
use super::format::format_resultat;
use super::jetons::{Operator, Token};
use super::nombre::{calculer, chiffres_significatifs, parse_operande};

/// Sentinelle affichée en état d’erreur.
pub const ERROR_DISPLAY: &str = "Error";

/// Opérande gauche mémorisé : valeur exacte + texte tel qu’affiché.
#[derive(Clone, Debug, PartialEq)]
pub struct Operande {
    valeur: BigRational,
    texte: String,
}

impl Operande {
    pub fn valeur(&self) -> &BigRational {
        &self.valeur
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Depuis une saisie ("3." -> "3", "-0." -> "0").
    fn depuis_saisie(saisie: &str) -> Result<Self, EngineError> {
        let valeur = parse_operande(saisie)?;
        let texte = if valeur.is_zero() {
            "0".to_string()
        } else {
            saisie.trim_end_matches('.').to_string()
        };
        Ok(Self { valeur, texte })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineState {
    previous_operand: Option<Operande>,
    /// Vide = rien tapé depuis le dernier opérateur.
    current_operand: String,
    pending_operator: Option<Operator>,
    just_evaluated: bool,
    error: Option<EngineError>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            previous_operand: None,
            current_operand: "0".to_string(),
            pending_operator: None,
            just_evaluated: false,
            error: None,
        }
    }
}

impl EngineState {
    pub fn previous_operand(&self) -> Option<&Operande> {
        self.previous_operand.as_ref()
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    pub fn error(&self) -> Option<&EngineError> {
        self.error.as_ref()
    }

    /// Écran principal.
    pub fn display_text(&self) -> String {
        if self.error.is_some() {
            return ERROR_DISPLAY.to_string();
        }
        if !self.current_operand.is_empty() {
            return self.current_operand.clone();
        }
        match &self.previous_operand {
            Some(p) => p.texte.clone(),
            None => "0".to_string(),
        }
    }

    /// Ligne d’expression au-dessus de l’écran : "12 +" (vide sinon).
    pub fn expression_text(&self) -> String {
        if self.error.is_some() {
            return String::new();
        }
        match (&self.previous_operand, self.pending_operator) {
            (Some(p), Some(op)) => format!("{} {op}", p.texte),
            _ => String::new(),
        }
    }
}

/// CalculatorEngine : un état, une configuration, aucun partage.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    etat: EngineState,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.bornee(),
            etat: EngineState::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &EngineState {
        &self.etat
    }

    pub fn error(&self) -> Option<&EngineError> {
        self.etat.error()
    }

    pub fn display_text(&self) -> String {
        self.etat.display_text()
    }

    pub fn expression_text(&self) -> String {
        self.etat.expression_text()
    }

    /// Applique une suite de jetons dans l’ordre.
    pub fn apply_all<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = Token>,
    {
        for t in tokens {
            self.apply(t);
        }
    }

    pub fn apply(&mut self, token: Token) {
        debug!(jeton = %token, "apply");

        // Chiffre hors 0..=9 : ignoré, même en état d’erreur.
        if let Token::Digit(d) = token {
            if d > 9 {
                debug!(chiffre = d, "chiffre hors 0..=9 ignoré");
                return;
            }
        }

        if self.etat.error.is_some() {
            // En erreur : seuls Clear et un chiffre agissent.
            match token {
                Token::Clear => self.clear(),
                Token::Digit(d) => {
                    self.clear();
                    self.digit(d);
                }
                _ => trace!(jeton = %token, "ignoré (état d’erreur)"),
            }
            return;
        }

        match token {
            Token::Digit(d) => self.digit(d),
            Token::DecimalPoint => self.decimal_point(),
            Token::Operator(op) => self.operator(op),
            Token::Equals => self.equals(),
            Token::Clear => self.clear(),
            Token::ToggleSign => self.toggle_sign(),
            Token::Backspace => self.backspace(),
        }
    }

    /* ------------------------ Jetons ------------------------ */

    fn digit(&mut self, d: u8) {
        let c = char::from(b'0' + d);
        let e = &mut self.etat;

        if e.just_evaluated {
            e.current_operand = c.to_string();
            e.just_evaluated = false;
            return;
        }

        let candidat = if e.current_operand == "0" {
            c.to_string()
        } else {
            format!("{}{c}", e.current_operand)
        };

        if chiffres_significatifs(&candidat) > self.config.max_input_digits {
            debug!(erreur = %EngineError::InputOverflow, max = self.config.max_input_digits);
            return;
        }
        e.current_operand = candidat;
    }

    fn decimal_point(&mut self) {
        let e = &mut self.etat;

        if e.just_evaluated {
            e.current_operand = "0.".to_string();
            e.just_evaluated = false;
            return;
        }
        if e.current_operand.contains('.') {
            return;
        }
        if e.current_operand.is_empty() {
            e.current_operand.push('0');
        }
        e.current_operand.push('.');
    }

    fn operator(&mut self, op: Operator) {
        if !self.etat.current_operand.is_empty() {
            let resolu = match (&self.etat.previous_operand, self.etat.pending_operator) {
                (Some(gauche), Some(pending)) => self.resoudre(gauche.valeur(), pending),
                _ => Operande::depuis_saisie(&self.etat.current_operand),
            };
            match resolu {
                Ok(o) => self.etat.previous_operand = Some(o),
                Err(err) => {
                    self.entrer_erreur(err);
                    return;
                }
            }
        } else if self.etat.previous_operand.is_none() {
            // garde-fou : pas d’opérande du tout => 0
            self.etat.previous_operand = Some(Operande {
                valeur: BigRational::zero(),
                texte: "0".to_string(),
            });
        }

        let e = &mut self.etat;
        e.pending_operator = Some(op);
        e.current_operand.clear();
        e.just_evaluated = false;
    }

    fn equals(&mut self) {
        let resolu = match (&self.etat.previous_operand, self.etat.pending_operator) {
            (Some(gauche), Some(op)) if !self.etat.current_operand.is_empty() => {
                self.resoudre(gauche.valeur(), op)
            }
            _ => {
                trace!("= sans opération en attente : aucun effet");
                return;
            }
        };

        match resolu {
            Ok(resultat) => {
                let e = &mut self.etat;
                e.current_operand = resultat.texte;
                e.previous_operand = None;
                e.pending_operator = None;
                e.just_evaluated = true;
            }
            Err(err) => self.entrer_erreur(err),
        }
    }

    fn clear(&mut self) {
        self.etat = EngineState::default();
    }

    fn toggle_sign(&mut self) {
        let cur = &mut self.etat.current_operand;
        if cur.is_empty() || cur.as_str() == "0" {
            return;
        }
        if cur.starts_with('-') {
            cur.remove(0);
        } else {
            cur.insert(0, '-');
        }
    }

    fn backspace(&mut self) {
        let e = &mut self.etat;
        if e.just_evaluated || e.current_operand.is_empty() {
            return;
        }
        e.current_operand.pop();
        if matches!(e.current_operand.as_str(), "" | "-" | "-0") {
            e.current_operand = "0".to_string();
        }
    }

    /* ------------------------ Calcul ------------------------ */

    /// gauche ⟨op⟩ opérande courant -> nouvel opérande (texte formaté).
    fn resoudre(&self, gauche: &BigRational, op: Operator) -> Result<Operande, EngineError> {
        let droite = parse_operande(&self.etat.current_operand)?;
        let valeur = calculer(gauche, op, &droite)?;
        let texte = format_resultat(
            &valeur,
            self.config.max_result_digits,
            self.config.chiffres_entiers_max(),
        )?;
        debug!(%op, resultat = %texte, "opération résolue");
        Ok(Operande { valeur, texte })
    }

    fn entrer_erreur(&mut self, err: EngineError) {
        warn!(erreur = %err, "passage en état d’erreur");
        self.etat = EngineState {
            current_operand: String::new(),
            error: Some(err),
            ..EngineState::default()
        };
    }
}
