//! Paice/Husk ("Lancaster") stemmer.
//!
//! Rules are written against the reversed word ending: `"ai*2."` reads as "if the word ends in
//! `-ia` and is still intact, remove two letters and stop". A rule is
//! `<reversed ending>[*]<remove count><append>[>|.]` where `*` restricts the rule to words no
//! earlier rule has touched, `>` continues stemming and `.` stops.

use std::collections::HashMap;

const DEFAULT_RULES: &[&str] = &[
	"ai*2.", "a*1.", "bb1.", "city3s.", "ci2>", "cn1t>", "dd1.", "dei3y>", "deec2ss.", "dee1.",
	"de2>", "dooh4>", "e1>", "feil1v.", "fi2>", "gni3>", "gai3y.", "ga2>", "gg1.", "ht*2.",
	"hsiug5ct.", "hsi3>", "i*1.", "i1y>", "ji1d.", "juf1s.", "ju1d.", "jo1d.", "jeh1r.",
	"jrev1t.", "jsim2t.", "jn1d.", "j1s.", "lbaifi6.", "lbai4y.", "lba3>", "lbi3.", "lib2l>",
	"lc1.", "lufi4y.", "luf3>", "lu2.", "lai3>", "lau3>", "la2>", "ll1.", "mui3.", "mu*2.",
	"msi3>", "mm1.", "nois4j>", "noix4ct.", "noi3>", "nai3>", "na2>", "nee0.", "ne2>", "nn1.",
	"pihs4>", "pp1.", "re2>", "rae0.", "ra2.", "ro2>", "ru2>", "rr1.", "rt1>", "rei3y>",
	"sei3y>", "sis2.", "si2>", "ssen4>", "ss0.", "suo3>", "su*2.", "s*1>", "s0.", "tacilp4y.",
	"ta2>", "tnem4>", "tne3>", "tna3>", "tpir2b.", "tpro2b.", "tcud1.", "tpmus2.", "tpec2iv.",
	"tulo2v.", "tsis0.", "tsi3>", "tt1.", "uqi3.", "ugo1.", "vis3j>", "vie0.", "vi2>", "ylb1>",
	"yli3y>", "ylp0.", "yl2>", "ygo1.", "yhp1.", "ymo1.", "ypo1.", "yti3>", "yte3>", "ytl2.",
	"yrtsi5.", "yra3>", "yro3>", "yfi3.", "ycn2t>", "yca3>", "zi2>", "zy1s.",
];

#[derive(Clone, Debug, PartialEq, Eq)]
struct Rule {
	/// Word ending in reading order.
	suffix: Vec<char>,
	intact_only: bool,
	remove: usize,
	append: String,
	stop: bool,
}

#[derive(Clone, Debug)]
pub struct LancasterStemmer {
	/// Rules keyed by the final letter they apply to, in table order.
	rules: HashMap<char, Vec<Rule>>,
}
impl LancasterStemmer {
	pub fn new() -> Self {
		Self::with_rules(DEFAULT_RULES)
	}

	/// Builds a stemmer from a custom rule table. Malformed rules are skipped.
	pub fn with_rules(table: &[&str]) -> Self {
		let mut rules: HashMap<char, Vec<Rule>> = HashMap::new();

		for raw in table {
			let Some(rule) = parse_rule(raw) else { continue };
			let Some(&last) = rule.suffix.last() else { continue };

			rules.entry(last).or_default().push(rule);
		}

		Self { rules }
	}

	pub fn stem(&self, word: &str) -> String {
		let intact: Vec<char> = word.to_lowercase().chars().collect();
		let mut word = intact.clone();

		loop {
			let Some(last) = last_letter(&word) else { break };
			let Some(rules) = self.rules.get(&word[last]) else { break };
			let mut applied = None;

			for rule in rules {
				if !word.ends_with(&rule.suffix) {
					continue;
				}
				if rule.intact_only && word != intact {
					continue;
				}
				if !is_acceptable(&word, rule.remove) {
					continue;
				}

				word.truncate(word.len() - rule.remove);
				word.extend(rule.append.chars());

				applied = Some(rule.stop);

				break;
			}

			if applied != Some(false) {
				break;
			}
		}

		word.into_iter().collect()
	}
}
impl Default for LancasterStemmer {
	fn default() -> Self {
		Self::new()
	}
}

fn parse_rule(raw: &str) -> Option<Rule> {
	let mut chars = raw.chars().peekable();
	let mut reversed = Vec::new();

	while let Some(ch) = chars.next_if(char::is_ascii_lowercase) {
		reversed.push(ch);
	}

	if reversed.is_empty() {
		return None;
	}

	let intact_only = chars.next_if_eq(&'*').is_some();
	let remove = chars.next()?.to_digit(10)? as usize;
	let mut append = String::new();

	while let Some(ch) = chars.next_if(char::is_ascii_lowercase) {
		append.push(ch);
	}

	let stop = match chars.next() {
		Some('.') => true,
		Some('>') | None => false,
		Some(_) => return None,
	};

	if chars.next().is_some() {
		return None;
	}

	reversed.reverse();

	// A continuing rule that rewrites its ending to itself would never terminate.
	if !stop
		&& remove <= reversed.len()
		&& reversed[reversed.len() - remove..].iter().copied().eq(append.chars())
	{
		return None;
	}

	Some(Rule { suffix: reversed, intact_only, remove, append, stop })
}

/// Position of the last letter in the word's leading alphabetic run.
fn last_letter(word: &[char]) -> Option<usize> {
	let run = word.iter().take_while(|ch| ch.is_alphabetic()).count();

	run.checked_sub(1)
}

fn is_vowel(ch: char) -> bool {
	matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Vowel-initial stems keep two letters; consonant-initial stems keep three including a vowel
/// in the second or third position.
fn is_acceptable(word: &[char], remove: usize) -> bool {
	let Some(kept) = word.len().checked_sub(remove) else { return false };

	if is_vowel(word[0]) {
		return kept >= 2;
	}

	kept >= 3 && (is_vowel(word[1]) || is_vowel(word[2]))
}
