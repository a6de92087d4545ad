use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{CalendarMode, IntSize, ViewCoordinate};
use crate::error::{CalendarError, CalendarResult};
use crate::interaction::PointerSession;
use crate::layout::{CalendarSettings, ResolvedChrome};
use crate::render::Renderer;

use super::{CalendarWidget, CalendarWidgetConfig};

pub const CALENDAR_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable widget state used by regression tests and debugging tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSnapshot {
    pub mode: CalendarMode,
    pub view: ViewCoordinate,
    pub size: IntSize,
    pub today: NaiveDate,
    pub selected_date: NaiveDate,
    pub previous_selected_date: NaiveDate,
    pub settings: CalendarSettings,
    pub chrome: ResolvedChrome,
    pub pointer_session: PointerSession,
    pub listener_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: CalendarSnapshot,
}

impl<R: Renderer> CalendarWidget<R> {
    #[must_use]
    pub fn snapshot(&self) -> CalendarSnapshot {
        CalendarSnapshot {
            mode: self.mode,
            view: self.view,
            size: self.size,
            today: self.today,
            selected_date: self.selected_date,
            previous_selected_date: self.previous_selected_date,
            settings: self.settings,
            chrome: self.tiles.chrome,
            pointer_session: self.interaction.session(),
            listener_count: self.listeners.len(),
        }
    }
}

impl CalendarSnapshot {
    pub fn to_json_pretty(self) -> CalendarResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            CalendarError::Serialization(format!("failed to serialize calendar snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(self) -> CalendarResult<String> {
        let payload = CalendarSnapshotJsonContractV1 {
            schema_version: CALENDAR_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            CalendarError::Serialization(format!(
                "failed to serialize calendar snapshot contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> CalendarResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<CalendarSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: CalendarSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                CalendarError::Serialization(format!(
                    "failed to parse calendar snapshot json payload: {e}"
                ))
            })?;
        if payload.schema_version != CALENDAR_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(CalendarError::Serialization(format!(
                "unsupported calendar snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl CalendarWidgetConfig {
    pub fn to_json_pretty(&self) -> CalendarResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CalendarError::Serialization(format!("failed to serialize widget config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> CalendarResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            CalendarError::Serialization(format!("failed to parse widget config json: {e}"))
        })
    }
}
