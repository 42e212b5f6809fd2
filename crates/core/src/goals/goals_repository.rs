use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use log::{debug, warn};
use num_traits::Zero;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::goals_errors::GoalError;
use super::goals_model::{
    Contribution, GoalsDocument, NewSavingsGoal, SavingsGoal, SavingsGoalUpdate,
};
use super::goals_traits::GoalRepositoryTrait;
use crate::constants::{GOALS_SCHEMA_VERSION, GOALS_STORE_KEY};
use crate::errors::Result;
use crate::store::KvStoreTrait;

/// Repository persisting the goals collection as one versioned document in
/// the key-value store.
///
/// Mutations are serialized through a mutex and apply a full
/// read-modify-write, so two rapid mutations in the same process never
/// interleave and lose an update. Cross-process writers are not
/// coordinated.
pub struct GoalRepository {
    store: Arc<dyn KvStoreTrait>,
    write_guard: Mutex<()>,
}

impl GoalRepository {
    pub fn new(store: Arc<dyn KvStoreTrait>) -> Self {
        GoalRepository {
            store,
            write_guard: Mutex::new(()),
        }
    }

    fn load_document(&self) -> Result<GoalsDocument> {
        let raw = match self.store.get(GOALS_STORE_KEY)? {
            Some(raw) => raw,
            None => return Ok(GoalsDocument::empty()),
        };

        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| GoalError::CorruptedDocument(e.to_string()))?;

        // Legacy documents were a bare goal array; wrap them in the
        // versioned envelope on first read.
        if value.is_array() {
            warn!("Migrating legacy savings goals document to v{}", GOALS_SCHEMA_VERSION);
            let goals: Vec<SavingsGoal> = serde_json::from_value(value)
                .map_err(|e| GoalError::CorruptedDocument(e.to_string()))?;
            return Ok(GoalsDocument {
                version: GOALS_SCHEMA_VERSION,
                goals,
            });
        }

        serde_json::from_value(value).map_err(|e| GoalError::CorruptedDocument(e.to_string()).into())
    }

    fn save_document(&self, document: &GoalsDocument) -> Result<()> {
        let raw = serde_json::to_string(document)?;
        self.store.set(GOALS_STORE_KEY, &raw)
    }

    fn validate_new_goal(new_goal: &NewSavingsGoal) -> Result<()> {
        if new_goal.name.trim().is_empty() {
            return Err(GoalError::InvalidData("goal name must not be empty".to_string()).into());
        }
        if new_goal.target_amount <= Decimal::zero() {
            return Err(
                GoalError::InvalidData("target amount must be positive".to_string()).into(),
            );
        }
        Ok(())
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<SavingsGoal>> {
        Ok(self.load_document()?.goals)
    }

    fn insert_new_goal(&self, new_goal: NewSavingsGoal) -> Result<SavingsGoal> {
        Self::validate_new_goal(&new_goal)?;

        let _guard = self.write_guard.lock().unwrap();
        let mut document = self.load_document()?;

        let goal = SavingsGoal {
            id: Uuid::new_v4().to_string(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            current_amount: Decimal::zero(),
            deadline: new_goal.deadline,
            category: new_goal.category,
            priority: new_goal.priority,
            contributions: Vec::new(),
            created_at: Utc::now(),
        };

        document.goals.push(goal.clone());
        self.save_document(&document)?;
        debug!("Created savings goal {}", goal.id);
        Ok(goal)
    }

    fn update_goal(&self, goal_id: &str, update: SavingsGoalUpdate) -> Result<SavingsGoal> {
        let _guard = self.write_guard.lock().unwrap();
        let mut document = self.load_document()?;

        let goal = document
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))?;

        if let Some(name) = update.name {
            goal.name = name;
        }
        if let Some(target_amount) = update.target_amount {
            if target_amount <= Decimal::zero() {
                return Err(
                    GoalError::InvalidData("target amount must be positive".to_string()).into(),
                );
            }
            goal.target_amount = target_amount;
        }
        if let Some(deadline) = update.deadline {
            goal.deadline = deadline;
        }
        if let Some(category) = update.category {
            goal.category = category;
        }
        if let Some(priority) = update.priority {
            goal.priority = priority;
        }

        let updated = goal.clone();
        self.save_document(&document)?;
        Ok(updated)
    }

    fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        let _guard = self.write_guard.lock().unwrap();
        let mut document = self.load_document()?;

        let before = document.goals.len();
        document.goals.retain(|g| g.id != goal_id);
        let deleted = before - document.goals.len();
        if deleted == 0 {
            return Err(GoalError::NotFound(goal_id.to_string()).into());
        }

        self.save_document(&document)?;
        Ok(deleted)
    }

    fn add_contribution(
        &self,
        goal_id: &str,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<SavingsGoal> {
        if amount <= Decimal::zero() {
            return Err(
                GoalError::InvalidData("contribution amount must be positive".to_string()).into(),
            );
        }

        let _guard = self.write_guard.lock().unwrap();
        let mut document = self.load_document()?;

        let goal = document
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))?;

        goal.contributions.push(Contribution { date, amount });
        goal.current_amount += amount;

        let updated = goal.clone();
        self.save_document(&document)?;
        Ok(updated)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::goals_model::GoalPriority;
    use crate::store::MemoryKvStore;
    use rust_decimal_macros::dec;

    fn repository() -> GoalRepository {
        GoalRepository::new(Arc::new(MemoryKvStore::new()))
    }

    fn new_goal(name: &str, target: Decimal) -> NewSavingsGoal {
        NewSavingsGoal {
            name: name.to_string(),
            target_amount: target,
            deadline: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            category: "General".to_string(),
            priority: GoalPriority::Medium,
        }
    }

    #[test]
    fn test_load_goals_on_empty_store() {
        let repo = repository();
        assert!(repo.load_goals().unwrap().is_empty());
    }

    #[test]
    fn test_insert_and_reload_roundtrip() {
        let repo = repository();
        let created = repo.insert_new_goal(new_goal("Emergency Fund", dec!(5000))).unwrap();

        let goals = repo.load_goals().unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0], created);
        assert_eq!(goals[0].current_amount, Decimal::ZERO);
        assert!(goals[0].contributions.is_empty());
    }

    #[test]
    fn test_insert_rejects_non_positive_target() {
        let repo = repository();
        assert!(repo.insert_new_goal(new_goal("Bad", dec!(0))).is_err());
        assert!(repo.insert_new_goal(new_goal("   ", dec!(100))).is_err());
    }

    #[test]
    fn test_contribution_updates_amount_and_list_together() {
        let repo = repository();
        let goal = repo.insert_new_goal(new_goal("Trip", dec!(900))).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();

        let updated = repo.add_contribution(&goal.id, dec!(150), today).unwrap();
        assert_eq!(updated.current_amount, dec!(150));
        assert_eq!(updated.contributions.len(), 1);
        assert_eq!(updated.contributions[0].amount, dec!(150));
        assert_eq!(updated.contributions[0].date, today);

        // Persisted state matches the returned state.
        let reloaded = repo.load_goals().unwrap();
        assert_eq!(reloaded[0], updated);
    }

    #[test]
    fn test_contribution_rejects_non_positive_amount() {
        let repo = repository();
        let goal = repo.insert_new_goal(new_goal("Trip", dec!(900))).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        assert!(repo.add_contribution(&goal.id, dec!(0), today).is_err());
    }

    #[test]
    fn test_update_applies_only_set_fields() {
        let repo = repository();
        let goal = repo.insert_new_goal(new_goal("Trip", dec!(900))).unwrap();

        let updated = repo
            .update_goal(
                &goal.id,
                SavingsGoalUpdate {
                    name: Some("Big Trip".to_string()),
                    priority: Some(GoalPriority::High),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Big Trip");
        assert_eq!(updated.priority, GoalPriority::High);
        assert_eq!(updated.target_amount, dec!(900));
        assert_eq!(updated.category, "General");
    }

    #[test]
    fn test_delete_removes_goal() {
        let repo = repository();
        let goal = repo.insert_new_goal(new_goal("Trip", dec!(900))).unwrap();
        assert_eq!(repo.delete_goal(&goal.id).unwrap(), 1);
        assert!(repo.load_goals().unwrap().is_empty());
        assert!(repo.delete_goal(&goal.id).is_err());
    }

    #[test]
    fn test_unknown_goal_is_not_found() {
        let repo = repository();
        let err = repo
            .add_contribution("missing", dec!(10), NaiveDate::from_ymd_opt(2025, 8, 6).unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_legacy_bare_array_is_migrated() {
        let store = Arc::new(MemoryKvStore::new());
        store
            .set(
                GOALS_STORE_KEY,
                r#"[{
                    "id": "g-1",
                    "name": "Laptop",
                    "targetAmount": 1200,
                    "currentAmount": 300,
                    "deadline": "2026-01-01",
                    "category": "Tech",
                    "priority": "high",
                    "contributions": [],
                    "createdAt": "2025-01-01T00:00:00Z"
                }]"#,
            )
            .unwrap();

        let repo = GoalRepository::new(store);
        let goals = repo.load_goals().unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].name, "Laptop");
        assert_eq!(goals[0].current_amount, dec!(300));
    }

    #[test]
    fn test_corrupted_document_is_an_error() {
        let store = Arc::new(MemoryKvStore::new());
        store.set(GOALS_STORE_KEY, "not json").unwrap();
        let repo = GoalRepository::new(store);
        assert!(repo.load_goals().is_err());
    }
}
