use tauri::AppHandle;

/// Queues `task` on the UI thread instead of running it inside the current toolkit callback.
pub fn run_on_main_thread_dispatch<F>(
    app_handle: &AppHandle,
    action: &str,
    task: F,
) -> Result<(), String>
where
    F: FnOnce(&AppHandle) + Send + 'static,
{
    let dispatched_handle = app_handle.clone();
    app_handle
        .run_on_main_thread(move || task(&dispatched_handle))
        .map_err(|error| format!("failed to dispatch '{action}' to the main thread: {error}"))
}
