use crate::app::{AppState, InputMode};

/// Filter the list belonging to the current search mode by `search_query`.
///
/// Matching is case-insensitive. Samples match on name or text, groups on
/// name or any member. An empty query restores the full list.
pub fn apply_search(app: &mut AppState) {
    let q = app.search_query.to_lowercase();
    match app.input_mode {
        InputMode::SearchText => {
            if q.is_empty() {
                app.samples = app.samples_all.clone();
            } else {
                app.samples = app
                    .samples_all
                    .iter()
                    .filter(|s| s.name.to_lowercase().contains(&q) || s.text.to_lowercase().contains(&q))
                    .cloned()
                    .collect();
            }
            app.selected_sample_index = 0;
        }
        InputMode::SearchNetwork => {
            if q.is_empty() {
                app.groups = app.network.groups.clone();
            } else {
                app.groups = app
                    .network
                    .groups
                    .iter()
                    .filter(|g| {
                        g.name.to_lowercase().contains(&q)
                            || g.members.iter().any(|m| m.to_lowercase().contains(&q))
                    })
                    .cloned()
                    .collect();
            }
            app.selected_group_index = 0;
        }
        InputMode::Normal | InputMode::Modal => {}
    }
}
