use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shift schedule entry for an employee.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Schedule")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ScheduleID")]
    pub id: i32,

    #[sea_orm(column_name = "EmployeeID")]
    pub employee_id: i32,

    #[sea_orm(column_name = "ScheduleDate")]
    pub schedule_date: NaiveDate,

    #[sea_orm(column_name = "ShiftDetails", nullable)]
    pub shift_details: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
