#[cfg(test)]
mod tests {
    use taskbook::db::tasks::TaskStore;
    use taskbook::libs::task::{SearchQuery, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SearchTestContext {
        _temp_dir: TempDir,
        store: TaskStore,
    }

    impl TestContext for SearchTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut store = TaskStore::open(temp_dir.path().join("tasks.json"));
            assert!(store.add("Задача с приоритетом", "Описание задачи", "Работа", "05.12.2024", "Средний"));
            assert!(store.add("Задача с высоким приоритетом", "Описание задачи", "Учеба", "06.12.2024", "Высокий"));
            assert!(store.add("Задача с низким приоритетом", "Описание задачи", "Личное", "07.12.2024", "Низкий"));
            SearchTestContext {
                _temp_dir: temp_dir,
                store,
            }
        }
    }

    fn titles(store: &TaskStore, query: &SearchQuery) -> Vec<String> {
        store.search(query).into_iter().map(|task| task.title).collect()
    }

    const ALL: [&str; 3] = [
        "Задача с приоритетом",
        "Задача с высоким приоритетом",
        "Задача с низким приоритетом",
    ];

    #[test_context(SearchTestContext)]
    #[test]
    fn test_search_by_id(ctx: &mut SearchTestContext) {
        assert_eq!(titles(&ctx.store, &SearchQuery::by_id(1)), vec!["Задача с приоритетом"]);
        assert!(ctx.store.search(&SearchQuery::by_id(999)).is_empty());
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_search_by_keyword_keeps_order(ctx: &mut SearchTestContext) {
        let query = SearchQuery::default().keyword("приоритет");
        assert_eq!(titles(&ctx.store, &query), ALL);

        let query = SearchQuery::default().keyword("ВЫСОКИМ");
        assert_eq!(titles(&ctx.store, &query), vec!["Задача с высоким приоритетом"]);

        let query = SearchQuery::default().keyword("не существует");
        assert!(ctx.store.search(&query).is_empty());
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_search_keyword_matches_description(ctx: &mut SearchTestContext) {
        let changes = TaskUpdate {
            description: Some("Купить молоко".to_string()),
            ..Default::default()
        };
        assert!(ctx.store.update(3, &changes));

        let query = SearchQuery::default().keyword("молоко");
        assert_eq!(titles(&ctx.store, &query), vec!["Задача с низким приоритетом"]);
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_search_by_category_substring(ctx: &mut SearchTestContext) {
        let query = SearchQuery::default().category("Работа");
        assert_eq!(titles(&ctx.store, &query), vec!["Задача с приоритетом"]);

        let query = SearchQuery::default().category("уч");
        assert_eq!(titles(&ctx.store, &query), vec!["Задача с высоким приоритетом"]);

        let query = SearchQuery::default().category("Не существует");
        assert!(ctx.store.search(&query).is_empty());
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_search_by_status(ctx: &mut SearchTestContext) {
        let query = SearchQuery::default().status("Не выполнена");
        assert_eq!(titles(&ctx.store, &query), ALL);

        let changes = TaskUpdate {
            status: Some("Выполнена".to_string()),
            ..Default::default()
        };
        assert!(ctx.store.update(2, &changes));

        let query = SearchQuery::default().status("выполнена");
        assert_eq!(titles(&ctx.store, &query), vec!["Задача с высоким приоритетом"]);

        let query = SearchQuery::default().status("Done");
        assert_eq!(titles(&ctx.store, &query), vec!["Задача с высоким приоритетом"]);

        let query = SearchQuery::default().status("Не существует");
        assert!(ctx.store.search(&query).is_empty());
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_search_filters_combine(ctx: &mut SearchTestContext) {
        let query = SearchQuery::by_id(2).keyword("высоким").category("Учеба").status("Не выполнена");
        assert_eq!(titles(&ctx.store, &query), vec!["Задача с высоким приоритетом"]);

        let query = SearchQuery::by_id(2).category("Работа");
        assert!(ctx.store.search(&query).is_empty());
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_search_without_filters_returns_all(ctx: &mut SearchTestContext) {
        assert_eq!(titles(&ctx.store, &SearchQuery::default()), ALL);
        assert_eq!(titles(&ctx.store, &SearchQuery::default().keyword("")), ALL);
    }

    #[test]
    fn test_group_by_category_first_seen_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(temp_dir.path().join("tasks.json"));
        assert!(store.add("task1", "d", "Work", "01.01.2025", "Low"));
        assert!(store.add("task2", "d", "Personal", "02.01.2025", "Low"));
        assert!(store.add("task3", "d", "Work", "03.01.2025", "Low"));

        let groups = store.group_by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Work");
        assert_eq!(groups[0].tasks.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(), ["task1", "task3"]);
        assert_eq!(groups[1].category, "Personal");
        assert_eq!(groups[1].tasks.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(), ["task2"]);
    }

    #[test]
    fn test_group_by_category_is_case_sensitive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(temp_dir.path().join("tasks.json"));
        assert!(store.add("a", "d", "Work", "01.01.2025", "Low"));
        assert!(store.add("b", "d", "work", "01.01.2025", "Low"));

        let categories: Vec<String> = store.group_by_category().into_iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Work", "work"]);
    }

    #[test]
    fn test_display_on_empty_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = TaskStore::open(temp_dir.path().join("tasks.json"));

        assert!(store.group_by_category().is_empty());
        assert!(!store.display());
        assert!(!store.display_grouped());
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_display_with_tasks(ctx: &mut SearchTestContext) {
        assert!(ctx.store.display());
        assert!(ctx.store.display_grouped());
    }
}
