/// Liveness probe; answers without touching the store.
pub async fn home() -> &'static str {
    "Todo list API is running! Go to /tasks to see data."
}
