use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::db::DatabaseAccess;
use crate::entities::{employee, schedule};
use crate::errors::ServiceError;

use super::{validate_date_range, Query};

/// One employee's shifts in an inclusive date range, ordered by date.
/// An unknown employee id yields an empty result, not an error.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeScheduleQuery {
    pub employee_id: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct EmployeeScheduleRow {
    pub employee_id: i32,
    pub employee_name: String,
    pub position: Option<String>,
    pub schedule_date: NaiveDate,
    pub shift_details: Option<String>,
}

#[async_trait]
impl Query for EmployeeScheduleQuery {
    type Result = Vec<EmployeeScheduleRow>;

    #[instrument(skip(self, db), fields(employee_id = self.employee_id, start = %self.start, end = %self.end))]
    async fn execute(&self, db: &DatabaseAccess) -> Result<Self::Result, ServiceError> {
        validate_date_range(self.start, self.end)?;
        debug!("Executing EmployeeScheduleQuery");

        employee::Entity::find()
            .select_only()
            .column_as(employee::Column::Id, "employee_id")
            .column_as(employee::Column::Name, "employee_name")
            .column_as(employee::Column::Position, "position")
            .column_as(schedule::Column::ScheduleDate, "schedule_date")
            .column_as(schedule::Column::ShiftDetails, "shift_details")
            .join(JoinType::InnerJoin, employee::Relation::Schedules.def())
            .filter(employee::Column::Id.eq(self.employee_id))
            .filter(schedule::Column::ScheduleDate.between(self.start, self.end))
            .order_by_asc(schedule::Column::ScheduleDate)
            .into_model::<EmployeeScheduleRow>()
            .all(db.get_pool())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}
