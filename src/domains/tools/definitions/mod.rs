//! Tool definitions module.
//!
//! One zero-sized type per Google Tasks operation, grouped by resource.

pub mod params;
pub mod task_lists;
pub mod tasks;

pub use params::{RequestDataParams, TaskBodyParams, TaskListBodyParams, TaskListParams, TaskParams};
pub use task_lists::{
    DeleteTaskListTool, GetTaskListTool, InsertTaskListTool, ListTaskListsParams,
    ListTaskListsTool, PatchTaskListTool, UpdateTaskListTool,
};
pub use tasks::{
    ClearTasksTool, DeleteTaskTool, GetTaskTool, InsertTaskParams, InsertTaskTool,
    ListTasksParams, ListTasksTool, MoveTaskParams, MoveTaskTool, PatchTaskTool, UpdateTaskTool,
};
