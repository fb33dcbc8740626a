use daywise_core::{
    Category, EntityRegistry, InMemoryRegistry, RegistryError, Task, TaskListQuery,
    ValidationError,
};

#[test]
fn add_category_assigns_sequential_unique_ids() {
    let mut registry = InMemoryRegistry::new();

    let work = registry.add_category(Category::new("Work", "#ff0000")).unwrap();
    let home = registry.add_category(Category::new("Home", "#00ff00")).unwrap();

    assert_eq!(work.id, Some(1));
    assert_eq!(home.id, Some(2));
    assert_eq!(work.name, "Work");
    assert_eq!(work.color, "#ff0000");
}

#[test]
fn add_category_rejects_blank_name_and_preassigned_id() {
    let mut registry = InMemoryRegistry::new();

    let err = registry.add_category(Category::new("", "#ff0000")).unwrap_err();
    assert_eq!(err, RegistryError::Validation(ValidationError::EmptyName));

    let mut pre_assigned = Category::new("Work", "#ff0000");
    pre_assigned.id = Some(7);
    let err = registry.add_category(pre_assigned).unwrap_err();
    assert_eq!(err, RegistryError::IdAlreadyAssigned(7));
}

#[test]
fn category_ids_are_never_reused_after_removal() {
    let mut registry = InMemoryRegistry::new();

    let first = registry.add_category(Category::new("Work", "#ff0000")).unwrap();
    registry.remove_category(first.id.unwrap()).unwrap();

    let second = registry.add_category(Category::new("Home", "#00ff00")).unwrap();
    assert_eq!(second.id, Some(2));
}

#[test]
fn update_category_requires_known_assigned_id() {
    let mut registry = InMemoryRegistry::new();
    let stored = registry.add_category(Category::new("Work", "#ff0000")).unwrap();

    let mut renamed = stored.clone();
    renamed.name = "Office".to_string();
    let updated = registry.update_category(renamed).unwrap();
    assert_eq!(updated.id, stored.id);
    assert_eq!(registry.get_category(1).unwrap().name, "Office");

    let err = registry.update_category(Category::new("draft", "#ffffff")).unwrap_err();
    assert_eq!(err, RegistryError::MissingId);

    let mut unknown = stored;
    unknown.id = Some(42);
    let err = registry.update_category(unknown).unwrap_err();
    assert_eq!(err, RegistryError::CategoryNotFound(42));
}

#[test]
fn add_task_resolves_category_reference() {
    let mut registry = InMemoryRegistry::new();
    registry.add_category(Category::new("Work", "#ff0000")).unwrap();

    let stored = registry
        .add_task(Task::between("Write report", 1, "2024-01-01", "2024-01-05"))
        .unwrap();
    assert_eq!(stored.id, Some(1));
    assert_eq!(stored.title, "Write report");
    assert_eq!(stored.category, 1);
    assert_eq!(stored.start.as_deref(), Some("2024-01-01"));
    assert_eq!(stored.end.as_deref(), Some("2024-01-05"));
}

#[test]
fn add_task_rejects_dangling_category() {
    let mut registry = InMemoryRegistry::new();

    let err = registry.add_task(Task::new("orphan", 99)).unwrap_err();
    assert_eq!(err, RegistryError::UnknownCategory(99));
    assert!(registry.get_task(1).is_none());
}

#[test]
fn add_task_rejects_reversed_time_window() {
    let mut registry = InMemoryRegistry::new();
    registry.add_category(Category::new("Work", "#ff0000")).unwrap();

    let err = registry
        .add_task(Task::between("report", 1, "2024-01-02", "2024-01-01"))
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::Validation(ValidationError::TimeWindowOutOfOrder {
            start: "2024-01-02".to_string(),
            end: "2024-01-01".to_string(),
        })
    );
}

#[test]
fn update_task_revalidates_reference_and_fields() {
    let mut registry = InMemoryRegistry::new();
    registry.add_category(Category::new("Work", "#ff0000")).unwrap();
    let mut stored = registry.add_task(Task::new("draft", 1)).unwrap();

    stored.title = "final".to_string();
    registry.update_task(stored.clone()).unwrap();
    assert_eq!(registry.get_task(1).unwrap().title, "final");

    stored.category = 5;
    let err = registry.update_task(stored.clone()).unwrap_err();
    assert_eq!(err, RegistryError::UnknownCategory(5));

    stored.category = 1;
    stored.id = Some(9);
    let err = registry.update_task(stored).unwrap_err();
    assert_eq!(err, RegistryError::TaskNotFound(9));
}

#[test]
fn remove_category_blocks_while_tasks_reference_it() {
    let mut registry = InMemoryRegistry::new();
    registry.add_category(Category::new("Work", "#ff0000")).unwrap();
    registry.add_task(Task::new("one", 1)).unwrap();
    registry.add_task(Task::new("two", 1)).unwrap();

    let err = registry.remove_category(1).unwrap_err();
    assert_eq!(err, RegistryError::CategoryInUse { id: 1, task_count: 2 });

    registry.remove_task(1).unwrap();
    registry.remove_task(2).unwrap();
    let removed = registry.remove_category(1).unwrap();
    assert_eq!(removed.name, "Work");
    assert!(registry.get_category(1).is_none());
}

#[test]
fn remove_unknown_ids_report_not_found() {
    let mut registry = InMemoryRegistry::new();

    assert_eq!(
        registry.remove_category(3).unwrap_err(),
        RegistryError::CategoryNotFound(3)
    );
    assert_eq!(
        registry.remove_task(3).unwrap_err(),
        RegistryError::TaskNotFound(3)
    );
}

#[test]
fn list_tasks_filters_by_category_and_bounds() {
    let mut registry = InMemoryRegistry::new();
    registry.add_category(Category::new("Work", "#ff0000")).unwrap();
    registry.add_category(Category::new("Home", "#00ff00")).unwrap();
    registry.add_task(Task::new("unbounded work", 1)).unwrap();
    registry
        .add_task(Task::between("bounded work", 1, "2024-01-01", "2024-01-02"))
        .unwrap();
    registry
        .add_task(Task::between("bounded home", 2, "2024-01-01", "2024-01-02"))
        .unwrap();

    let work_only = registry.list_tasks(&TaskListQuery {
        category: Some(1),
        ..TaskListQuery::default()
    });
    assert_eq!(work_only.len(), 2);

    let bounded = registry.list_tasks(&TaskListQuery {
        bounded_only: true,
        ..TaskListQuery::default()
    });
    assert_eq!(bounded.len(), 2);
    assert!(bounded.iter().all(|task| task.start.is_some() && task.end.is_some()));

    let paged = registry.list_tasks(&TaskListQuery {
        limit: Some(1),
        offset: 1,
        ..TaskListQuery::default()
    });
    assert_eq!(paged.len(), 1);
    assert_eq!(paged[0].id, Some(2));
}

#[test]
fn clear_tasks_keeps_id_history() {
    let mut registry = InMemoryRegistry::new();
    registry.add_category(Category::new("Work", "#ff0000")).unwrap();
    registry.add_task(Task::new("one", 1)).unwrap();
    registry.add_task(Task::new("two", 1)).unwrap();

    assert_eq!(registry.clear_tasks(), 2);
    assert!(registry.list_tasks(&TaskListQuery::default()).is_empty());

    let next = registry.add_task(Task::new("three", 1)).unwrap();
    assert_eq!(next.id, Some(3));
}
