//! In-memory model behind the meal-row widgets.
//!
//! The editor owns the row records; widgets render from them and report
//! edits back. Network reads are not performed here: operations that need
//! the ingredient catalog hand back a ticket, the caller runs the request
//! and feeds the outcome to `apply_search` / `apply_units`. Each ticket
//! carries a sequence number and only the latest ticket issued for a row
//! is ever applied, so a slow response to an old keystroke cannot replace
//! the suggestions of a newer one.

use std::fmt;

use shared::{validate_meals, IngredientSuggestion, MealRow, MAX_SUGGESTIONS, MIN_SEARCH_CHARS};

use crate::services::error::ApiError;
use crate::services::logging::Logger;

const COMPONENT: &str = "meal-editor";

pub const SELECT_UNIT_LABEL: &str = "Select unit";
pub const NO_UNITS_LABEL: &str = "No units";

/// Stable identity of a row. Keys are never reused within an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(u64);

impl RowKey {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "meal-row-{}", self.0)
    }
}

/// State of a row's unit selector
#[derive(Debug, Clone, PartialEq)]
pub enum UnitOptions {
    /// No ingredient resolved yet
    Unresolved,
    Loading,
    Loaded(Vec<String>),
    /// The unit lookup failed
    Unavailable,
}

/// One `<option>` of the unit selector
#[derive(Debug, Clone, PartialEq)]
pub struct UnitChoice {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl UnitChoice {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            disabled: true,
        }
    }

    fn unit(unit: &str) -> Self {
        Self {
            value: unit.to_string(),
            label: unit.to_string(),
            disabled: false,
        }
    }
}

/// Why a catalog request was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOrigin {
    /// The user typed or picked a suggestion
    Selection,
    /// Re-resolving a meal loaded into the editor for editing
    Prefill,
}

/// Pending ingredient search for one row
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub key: RowKey,
    pub query: String,
    pub origin: LookupOrigin,
    seq: u64,
}

/// Pending unit lookup for one row
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTicket {
    pub key: RowKey,
    pub ingredient_id: i64,
    pub origin: LookupOrigin,
    seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealRowState {
    key: RowKey,
    pub name: String,
    /// Raw text of the amount input
    pub amount: String,
    /// Selected unit, empty when unset
    pub unit: String,
    pub suggestions: Vec<IngredientSuggestion>,
    pub units: UnitOptions,
    /// Unit the row was loaded with; reselected whenever it reappears
    stored_unit: Option<String>,
    search_seq: u64,
    unit_seq: u64,
}

impl MealRowState {
    fn empty(key: RowKey) -> Self {
        Self {
            key,
            name: String::new(),
            amount: String::new(),
            unit: String::new(),
            suggestions: Vec::new(),
            units: UnitOptions::Unresolved,
            stored_unit: None,
            search_seq: 0,
            unit_seq: 0,
        }
    }

    pub fn key(&self) -> RowKey {
        self.key
    }

    /// Options the unit selector shows, placeholder first
    pub fn unit_choices(&self) -> Vec<UnitChoice> {
        match &self.units {
            UnitOptions::Loaded(units) => std::iter::once(UnitChoice::placeholder(SELECT_UNIT_LABEL))
                .chain(units.iter().map(|unit| UnitChoice::unit(unit)))
                .collect(),
            UnitOptions::Unavailable if self.unit.is_empty() => vec![UnitChoice::placeholder(NO_UNITS_LABEL)],
            _ if !self.unit.is_empty() => vec![
                UnitChoice::placeholder(SELECT_UNIT_LABEL),
                UnitChoice::unit(&self.unit),
            ],
            _ => vec![UnitChoice::placeholder(SELECT_UNIT_LABEL)],
        }
    }

    /// The selector is usable once units loaded or a stored unit is shown
    pub fn unit_select_enabled(&self) -> bool {
        matches!(self.units, UnitOptions::Loaded(_)) || !self.unit.is_empty()
    }

    pub fn to_meal_row(&self) -> MealRow {
        MealRow {
            name: self.name.trim().to_string(),
            amount: self.amount.trim().parse::<f64>().unwrap_or(f64::NAN),
            unit: self.unit.trim().to_string(),
        }
    }
}

fn format_amount(amount: f64) -> String {
    if amount.is_finite() {
        amount.to_string()
    } else {
        String::new()
    }
}

/// Ordered list of meal rows with their autocomplete state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MealRowEditor {
    rows: Vec<MealRowState>,
    next_key: u64,
    next_seq: u64,
}

impl MealRowEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor holding a single empty row, the add-entry starting state
    pub fn with_empty_row() -> Self {
        let mut editor = Self::new();
        editor.add_row(None);
        editor
    }

    pub fn rows(&self) -> &[MealRowState] {
        &self.rows
    }

    pub fn row(&self, key: RowKey) -> Option<&MealRowState> {
        self.rows.iter().find(|row| row.key == key)
    }

    fn row_mut(&mut self, key: RowKey) -> Option<&mut MealRowState> {
        self.rows.iter_mut().find(|row| row.key == key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Append a row. A prefilled row returns the search that re-resolves its
    /// ingredient so the unit list can be repopulated.
    pub fn add_row(&mut self, initial: Option<MealRow>) -> (RowKey, Option<SearchTicket>) {
        let key = RowKey(self.next_key);
        self.next_key += 1;

        let mut row = MealRowState::empty(key);
        let mut ticket = None;

        if let Some(meal) = initial {
            row.name = meal.name;
            row.amount = format_amount(meal.amount);
            let unit = meal.unit.trim().to_string();
            if !unit.is_empty() {
                row.unit = unit.clone();
                row.stored_unit = Some(unit);
            }

            let query = row.name.trim().to_string();
            if !query.is_empty() {
                let seq = self.bump_seq();
                row.search_seq = seq;
                ticket = Some(SearchTicket {
                    key,
                    query,
                    origin: LookupOrigin::Prefill,
                    seq,
                });
            }
        }

        self.rows.push(row);
        (key, ticket)
    }

    /// Detach a row. Other rows keep their keys and fields.
    pub fn remove_row(&mut self, key: RowKey) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.key != key);
        self.rows.len() != before
    }

    /// Record typed text. Returns the catalog search to run, or `None` when
    /// the query is too short to be worth a request.
    pub fn search(&mut self, key: RowKey, text: &str) -> Option<SearchTicket> {
        let seq = self.bump_seq();
        let row = self.row_mut(key)?;

        row.name = text.to_string();
        row.suggestions.clear();
        // Any search still in flight for this row is now stale
        row.search_seq = seq;

        let query = text.trim();
        if query.chars().count() < MIN_SEARCH_CHARS {
            return None;
        }

        Some(SearchTicket {
            key,
            query: query.to_string(),
            origin: LookupOrigin::Selection,
            seq,
        })
    }

    /// Apply a finished search. Stale or orphaned results are dropped. A
    /// prefill search that finds its ingredient yields the unit lookup to run.
    pub fn apply_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<IngredientSuggestion>, ApiError>,
    ) -> Option<UnitTicket> {
        let Some(row) = self.row(ticket.key) else {
            Logger::debug_with_component(COMPONENT, &format!("Dropping search for removed row {}", ticket.key));
            return None;
        };
        if row.search_seq != ticket.seq {
            Logger::debug_with_component(
                COMPONENT,
                &format!("Discarding stale results for '{}' on {}", ticket.query, ticket.key),
            );
            return None;
        }

        match (ticket.origin, result) {
            (LookupOrigin::Selection, Ok(results)) => {
                let row = self.row_mut(ticket.key)?;
                row.suggestions = results.into_iter().take(MAX_SUGGESTIONS).collect();
                None
            }
            (LookupOrigin::Selection, Err(e)) => {
                Logger::warn_with_component(COMPONENT, &format!("Autocomplete error: {}", e));
                let row = self.row_mut(ticket.key)?;
                row.suggestions.clear();
                None
            }
            (LookupOrigin::Prefill, Ok(results)) => {
                let wanted = ticket.query.to_lowercase();
                let found = results.into_iter().find(|item| item.name.to_lowercase() == wanted);
                match found {
                    Some(ingredient) => self.issue_unit_lookup(ticket.key, ingredient.id, LookupOrigin::Prefill),
                    None => {
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!("No catalog match for '{}', keeping stored unit", ticket.query),
                        );
                        None
                    }
                }
            }
            (LookupOrigin::Prefill, Err(e)) => {
                Logger::warn_with_component(COMPONENT, &format!("Failed to preload units: {}", e));
                None
            }
        }
    }

    fn issue_unit_lookup(&mut self, key: RowKey, ingredient_id: i64, origin: LookupOrigin) -> Option<UnitTicket> {
        let seq = self.bump_seq();
        let row = self.row_mut(key)?;
        row.units = UnitOptions::Loading;
        row.unit_seq = seq;
        Some(UnitTicket {
            key,
            ingredient_id,
            origin,
            seq,
        })
    }

    /// Pick a suggestion: the list is cleared first, then the name is set and
    /// the unit selector is reset while its units load.
    pub fn select_suggestion(&mut self, key: RowKey, suggestion: &IngredientSuggestion) -> Option<UnitTicket> {
        let seq = self.bump_seq();
        let row = self.row_mut(key)?;

        row.suggestions.clear();
        row.name = suggestion.name.clone();
        row.search_seq = seq;
        row.unit.clear();

        self.issue_unit_lookup(key, suggestion.id, LookupOrigin::Selection)
    }

    /// Apply a finished unit lookup; stale results are dropped
    pub fn apply_units(&mut self, ticket: &UnitTicket, result: Result<Vec<String>, ApiError>) -> bool {
        let Some(row) = self.row_mut(ticket.key) else {
            return false;
        };
        if row.unit_seq != ticket.seq {
            Logger::debug_with_component(
                COMPONENT,
                &format!("Discarding stale units for ingredient {} on {}", ticket.ingredient_id, ticket.key),
            );
            return false;
        }

        match result {
            Ok(units) => {
                row.unit = match &row.stored_unit {
                    Some(stored) if units.contains(stored) => stored.clone(),
                    _ => String::new(),
                };
                row.units = UnitOptions::Loaded(units);
            }
            Err(e) => {
                Logger::warn_with_component(COMPONENT, &format!("Failed to load units: {}", e));
                row.units = UnitOptions::Unavailable;
                if ticket.origin == LookupOrigin::Selection {
                    row.unit.clear();
                }
            }
        }
        true
    }

    pub fn set_amount(&mut self, key: RowKey, amount: &str) -> bool {
        match self.row_mut(key) {
            Some(row) => {
                row.amount = amount.to_string();
                true
            }
            None => false,
        }
    }

    /// Select a unit; only values offered by the selector are accepted
    pub fn set_unit(&mut self, key: RowKey, unit: &str) -> bool {
        let Some(row) = self.row_mut(key) else {
            return false;
        };
        let offered = row
            .unit_choices()
            .iter()
            .any(|choice| !choice.disabled && choice.value == unit);
        if unit.is_empty() || offered {
            row.unit = unit.to_string();
            true
        } else {
            false
        }
    }

    /// Hide the suggestion list of a row (input blur)
    pub fn clear_suggestions(&mut self, key: RowKey) {
        if let Some(row) = self.row_mut(key) {
            row.suggestions.clear();
        }
    }

    /// Current rows as meals, in display order. No validation happens here.
    pub fn serialize(&self) -> Vec<MealRow> {
        self.rows.iter().map(MealRowState::to_meal_row).collect()
    }

    pub fn validate(rows: &[MealRow]) -> bool {
        validate_meals(rows)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Back to a single empty row
    pub fn reset(&mut self) {
        self.clear();
        self.add_row(None);
    }

    /// Replace all rows with prefilled ones, returning their re-resolve searches
    pub fn load(&mut self, meals: &[MealRow]) -> Vec<SearchTicket> {
        self.clear();
        meals
            .iter()
            .filter_map(|meal| self.add_row(Some(meal.clone())).1)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> IngredientSuggestion {
        IngredientSuggestion {
            id: 1,
            name: "Chicken Breast".to_string(),
        }
    }

    fn suggestions(count: i64) -> Vec<IngredientSuggestion> {
        (0..count)
            .map(|id| IngredientSuggestion {
                id,
                name: format!("Item {}", id),
            })
            .collect()
    }

    fn units(list: &[&str]) -> Vec<String> {
        list.iter().map(|u| u.to_string()).collect()
    }

    fn labels(row: &MealRowState) -> Vec<(String, bool)> {
        row.unit_choices()
            .into_iter()
            .map(|choice| (choice.label, choice.disabled))
            .collect()
    }

    #[test]
    fn test_new_row_is_empty_with_disabled_unit_selector() {
        let mut editor = MealRowEditor::new();
        let (key, ticket) = editor.add_row(None);

        assert!(ticket.is_none());
        let row = editor.row(key).unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.units, UnitOptions::Unresolved);
        assert!(!row.unit_select_enabled());
        assert_eq!(labels(row), vec![("Select unit".to_string(), true)]);
    }

    #[test]
    fn test_search_below_threshold_issues_no_request() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        assert!(editor.search(key, "a").is_none());
        assert!(editor.search(key, " a ").is_none());
        assert_eq!(editor.row(key).unwrap().name, " a ");

        let ticket = editor.search(key, "ab").unwrap();
        assert_eq!(ticket.query, "ab");
        assert_eq!(ticket.origin, LookupOrigin::Selection);
    }

    #[test]
    fn test_short_query_clears_shown_suggestions() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        let ticket = editor.search(key, "chick").unwrap();
        editor.apply_search(&ticket, Ok(vec![chicken()]));
        assert_eq!(editor.row(key).unwrap().suggestions.len(), 1);

        assert!(editor.search(key, "c").is_none());
        assert!(editor.row(key).unwrap().suggestions.is_empty());
    }

    #[test]
    fn test_search_then_select_scenario() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        let ticket = editor.search(key, "chick").unwrap();
        assert_eq!(ticket.query, "chick");

        assert!(editor.apply_search(&ticket, Ok(vec![chicken()])).is_none());
        let names: Vec<_> = editor.row(key).unwrap().suggestions.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, vec!["Chicken Breast".to_string()]);

        let unit_ticket = editor.select_suggestion(key, &chicken()).unwrap();
        assert_eq!(unit_ticket.ingredient_id, 1);
        assert_eq!(editor.row(key).unwrap().name, "Chicken Breast");
        assert_eq!(editor.row(key).unwrap().units, UnitOptions::Loading);

        assert!(editor.apply_units(&unit_ticket, Ok(units(&["gram", "piece"]))));
        let row = editor.row(key).unwrap();
        assert_eq!(
            labels(row),
            vec![
                ("Select unit".to_string(), true),
                ("gram".to_string(), false),
                ("piece".to_string(), false),
            ]
        );
        assert_eq!(row.unit, "");
        assert!(row.unit_select_enabled());
    }

    #[test]
    fn test_at_most_five_suggestions_shown() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        let ticket = editor.search(key, "it").unwrap();
        editor.apply_search(&ticket, Ok(suggestions(8)));

        let shown = &editor.row(key).unwrap().suggestions;
        assert_eq!(shown.len(), 5);
        assert_eq!(shown[0].name, "Item 0");
        assert_eq!(shown[4].name, "Item 4");
    }

    #[test]
    fn test_search_failure_clears_suggestions() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        let first = editor.search(key, "ric").unwrap();
        editor.apply_search(&first, Ok(suggestions(3)));

        let second = editor.search(key, "rice").unwrap();
        editor.apply_search(&second, Err(ApiError::Network("offline".to_string())));

        let row = editor.row(key).unwrap();
        assert!(row.suggestions.is_empty());
        assert_eq!(row.name, "rice");
    }

    #[test]
    fn test_stale_search_response_is_discarded() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        let older = editor.search(key, "ch").unwrap();
        let newer = editor.search(key, "chick").unwrap();

        editor.apply_search(&newer, Ok(vec![chicken()]));
        // The slower response to the earlier keystroke arrives last
        editor.apply_search(&older, Ok(suggestions(5)));

        let shown = &editor.row(key).unwrap().suggestions;
        assert_eq!(shown, &vec![chicken()]);
    }

    #[test]
    fn test_response_after_short_query_is_discarded() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        let pending = editor.search(key, "ch").unwrap();
        assert!(editor.search(key, "c").is_none());
        editor.apply_search(&pending, Ok(vec![chicken()]));

        assert!(editor.row(key).unwrap().suggestions.is_empty());
    }

    #[test]
    fn test_select_clears_suggestions_before_unit_outcome() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        let ticket = editor.search(key, "chick").unwrap();
        editor.apply_search(&ticket, Ok(vec![chicken()]));

        let unit_ticket = editor.select_suggestion(key, &chicken()).unwrap();
        assert!(editor.row(key).unwrap().suggestions.is_empty());

        editor.apply_units(&unit_ticket, Err(ApiError::Network("offline".to_string())));
        let row = editor.row(key).unwrap();
        assert!(row.suggestions.is_empty());
        assert_eq!(row.units, UnitOptions::Unavailable);
        assert_eq!(labels(row), vec![("No units".to_string(), true)]);
        assert!(!row.unit_select_enabled());
    }

    #[test]
    fn test_late_search_after_selection_does_not_reopen_list() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        let pending = editor.search(key, "chick").unwrap();
        editor.select_suggestion(key, &chicken());
        editor.apply_search(&pending, Ok(vec![chicken()]));

        assert!(editor.row(key).unwrap().suggestions.is_empty());
    }

    #[test]
    fn test_stale_unit_lookup_is_discarded() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();
        let rice = IngredientSuggestion { id: 2, name: "Rice".to_string() };

        let first = editor.select_suggestion(key, &chicken()).unwrap();
        let second = editor.select_suggestion(key, &rice).unwrap();

        assert!(editor.apply_units(&second, Ok(units(&["cup"]))));
        assert!(!editor.apply_units(&first, Ok(units(&["gram", "piece"]))));
        assert_eq!(editor.row(key).unwrap().units, UnitOptions::Loaded(units(&["cup"])));
    }

    #[test]
    fn test_remove_row_leaves_other_rows_untouched() {
        let mut editor = MealRowEditor::new();
        let (first, _) = editor.add_row(None);
        let (second, _) = editor.add_row(None);
        let (third, _) = editor.add_row(None);

        editor.search(first, "oats");
        editor.set_amount(first, "80");
        editor.search(third, "banana");
        editor.set_amount(third, "1");
        let before_first = editor.row(first).unwrap().clone();
        let before_third = editor.row(third).unwrap().clone();

        assert!(editor.remove_row(second));
        assert!(!editor.remove_row(second));

        assert_eq!(editor.len(), 2);
        assert_eq!(editor.row(first), Some(&before_first));
        assert_eq!(editor.row(third), Some(&before_third));

        let (fourth, _) = editor.add_row(None);
        assert_ne!(fourth, second);
    }

    #[test]
    fn test_results_for_removed_row_are_ignored() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        let ticket = editor.search(key, "chick").unwrap();
        editor.remove_row(key);

        assert!(editor.apply_search(&ticket, Ok(vec![chicken()])).is_none());
        assert!(editor.is_empty());
    }

    #[test]
    fn test_serialize_reads_rows_in_order() {
        let mut editor = MealRowEditor::new();
        let (a, _) = editor.add_row(None);
        let (b, _) = editor.add_row(None);

        let ticket = editor.select_suggestion(a, &chicken()).unwrap();
        editor.apply_units(&ticket, Ok(units(&["gram", "piece"])));
        editor.set_amount(a, "150");
        assert!(editor.set_unit(a, "gram"));

        editor.search(b, "mystery");
        editor.set_amount(b, "lots");

        let meals = editor.serialize();
        assert_eq!(meals[0], MealRow::new("Chicken Breast", 150.0, "gram"));
        assert_eq!(meals[1].name, "mystery");
        assert!(meals[1].amount.is_nan());
        assert_eq!(meals[1].unit, "");

        assert!(!MealRowEditor::validate(&meals));
        assert!(MealRowEditor::validate(&meals[..1]));
        assert!(!MealRowEditor::validate(&[]));
    }

    #[test]
    fn test_set_unit_only_accepts_offered_units() {
        let mut editor = MealRowEditor::with_empty_row();
        let key = editor.rows()[0].key();

        assert!(!editor.set_unit(key, "gram"));

        let ticket = editor.select_suggestion(key, &chicken()).unwrap();
        editor.apply_units(&ticket, Ok(units(&["gram", "piece"])));

        assert!(!editor.set_unit(key, "cup"));
        assert!(editor.set_unit(key, "piece"));
        assert_eq!(editor.row(key).unwrap().unit, "piece");
        assert!(editor.set_unit(key, ""));
    }

    #[test]
    fn test_prefilled_row_reresolves_units_and_keeps_stored_unit() {
        let mut editor = MealRowEditor::new();
        let (key, ticket) = editor.add_row(Some(MealRow::new("Chicken Breast", 150.0, "gram")));
        let ticket = ticket.unwrap();

        let row = editor.row(key).unwrap();
        assert_eq!(row.name, "Chicken Breast");
        assert_eq!(row.amount, "150");
        assert_eq!(row.unit, "gram");
        assert_eq!(ticket.origin, LookupOrigin::Prefill);
        assert_eq!(ticket.query, "Chicken Breast");

        let results = vec![
            IngredientSuggestion { id: 7, name: "Chicken Breast Fillet".to_string() },
            IngredientSuggestion { id: 1, name: "chicken breast".to_string() },
        ];
        let unit_ticket = editor.apply_search(&ticket, Ok(results)).unwrap();
        assert_eq!(unit_ticket.ingredient_id, 1);
        // Prefill lookups never show suggestions
        assert!(editor.row(key).unwrap().suggestions.is_empty());

        editor.apply_units(&unit_ticket, Ok(units(&["piece", "gram"])));
        let row = editor.row(key).unwrap();
        assert_eq!(row.unit, "gram");
        assert_eq!(row.units, UnitOptions::Loaded(units(&["piece", "gram"])));
    }

    #[test]
    fn test_prefilled_unit_left_unset_when_not_offered() {
        let mut editor = MealRowEditor::new();
        let (key, ticket) = editor.add_row(Some(MealRow::new("Oats", 80.0, "scoop")));

        let unit_ticket = editor
            .apply_search(&ticket.unwrap(), Ok(vec![IngredientSuggestion { id: 3, name: "Oats".to_string() }]))
            .unwrap();
        editor.apply_units(&unit_ticket, Ok(units(&["gram", "cup"])));

        assert_eq!(editor.row(key).unwrap().unit, "");
    }

    #[test]
    fn test_failed_prefill_keeps_entry_resubmittable() {
        let mut editor = MealRowEditor::new();
        let (key, ticket) = editor.add_row(Some(MealRow::new("Oats", 80.0, "gram")));

        assert!(editor
            .apply_search(&ticket.unwrap(), Err(ApiError::Network("offline".to_string())))
            .is_none());

        let row = editor.row(key).unwrap();
        assert_eq!(row.unit, "gram");
        assert!(row.unit_select_enabled());
        assert_eq!(
            labels(row),
            vec![("Select unit".to_string(), true), ("gram".to_string(), false)]
        );
        assert!(MealRowEditor::validate(&editor.serialize()));
    }

    #[test]
    fn test_failed_prefill_unit_lookup_keeps_stored_unit() {
        let mut editor = MealRowEditor::new();
        let (key, ticket) = editor.add_row(Some(MealRow::new("Oats", 80.0, "gram")));
        let unit_ticket = editor
            .apply_search(&ticket.unwrap(), Ok(vec![IngredientSuggestion { id: 3, name: "Oats".to_string() }]))
            .unwrap();

        editor.apply_units(&unit_ticket, Err(ApiError::Status { status: 502, message: "bad gateway".to_string() }));

        let row = editor.row(key).unwrap();
        assert_eq!(row.units, UnitOptions::Unavailable);
        assert_eq!(row.unit, "gram");
    }

    #[test]
    fn test_selection_in_edit_flow_reselects_stored_unit() {
        let mut editor = MealRowEditor::new();
        let (key, _) = editor.add_row(Some(MealRow::new("Chicken", 100.0, "gram")));

        let unit_ticket = editor.select_suggestion(key, &chicken()).unwrap();
        assert_eq!(editor.row(key).unwrap().unit, "");

        editor.apply_units(&unit_ticket, Ok(units(&["gram", "piece"])));
        assert_eq!(editor.row(key).unwrap().unit, "gram");
    }

    #[test]
    fn test_reset_leaves_one_empty_row() {
        let mut editor = MealRowEditor::new();
        editor.add_row(Some(MealRow::new("Oats", 80.0, "gram")));
        editor.add_row(None);

        editor.reset();

        assert_eq!(editor.len(), 1);
        let row = &editor.rows()[0];
        assert_eq!(row.name, "");
        assert_eq!(row.amount, "");
        assert_eq!(row.units, UnitOptions::Unresolved);
    }

    #[test]
    fn test_load_replaces_rows_and_returns_prefill_searches() {
        let mut editor = MealRowEditor::with_empty_row();
        let meals = vec![
            MealRow::new("Oats", 80.0, "gram"),
            MealRow::new("Banana", 1.0, "piece"),
        ];

        let tickets = editor.load(&meals);

        assert_eq!(editor.len(), 2);
        assert_eq!(tickets.len(), 2);
        assert!(tickets.iter().all(|t| t.origin == LookupOrigin::Prefill));
        assert_eq!(editor.serialize(), meals);
    }
}
