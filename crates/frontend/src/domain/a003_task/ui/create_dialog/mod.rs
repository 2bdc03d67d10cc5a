use crate::shared::components::ui::Select;
use contracts::domain::a003_task::{
    NewTask, TaskField, TaskForm, TaskFormError, TaskLabel, TaskPriority, ASSIGNEES,
};
use leptos::prelude::*;
use thaw::*;

fn priority_options() -> Vec<(String, String)> {
    TaskPriority::all()
        .into_iter()
        .map(|p| (p.value().to_string(), p.label().to_string()))
        .collect()
}

fn label_options() -> Vec<(String, String)> {
    TaskLabel::all()
        .into_iter()
        .map(|l| (l.value().to_string(), l.label().to_string()))
        .collect()
}

fn assignee_options() -> Vec<(String, String)> {
    ASSIGNEES
        .iter()
        .map(|(value, name)| (value.to_string(), name.to_string()))
        .collect()
}

/// "Create a new task" dialog.
///
/// Field errors appear after the first submit and follow the form from then
/// on. With "Create more" checked the dialog stays open and starts over.
#[component]
pub fn CreateTaskDialog(
    open: RwSignal<bool>,
    #[prop(optional)] on_created: Option<Callback<NewTask>>,
) -> impl IntoView {
    let form = RwSignal::new(TaskForm::default());
    let submitted = RwSignal::new(false);
    let create_more = RwSignal::new(false);

    let errors = Memo::new(move |_| {
        if !submitted.get() {
            return Vec::new();
        }
        form.with(|f| f.validate().err().unwrap_or_default())
    });
    let error_for =
        move |field: TaskField| Signal::derive(move || errors.with(|e| TaskFormError::message_for(e, field)));

    let reset = move || {
        form.set(TaskForm::default());
        submitted.set(false);
    };

    // Closing by any means discards the draft.
    Effect::new(move |_| {
        if !open.get() {
            reset();
        }
    });

    let on_submit = move |_| match form.with_untracked(|f| f.validate()) {
        Ok(task) => {
            log::info!(
                "task submitted: {}",
                serde_json::to_string(&task).unwrap_or_default()
            );
            if let Some(cb) = on_created {
                cb.run(task);
            }
            reset();
            if !create_more.get_untracked() {
                open.set(false);
            }
        }
        Err(errors) => {
            log::debug!("task form rejected: {} field error(s)", errors.len());
            submitted.set(true);
        }
    };

    let title_error = error_for(TaskField::Title);

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Create a new task"</DialogTitle>
                    <DialogContent>
                        <div class="task-form">
                            <div class="task-form__column">
                                <div class="form__group">
                                    <label class="form__label" for="task-title">"Add a title *"</label>
                                    <input
                                        id="task-title"
                                        type="text"
                                        class="form__input"
                                        class:form__input--invalid=move || title_error.get().is_some()
                                        placeholder="Title"
                                        prop:value=move || form.with(|f| f.title.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.title = value);
                                        }
                                    />
                                    {move || title_error.get().map(|e| view! { <p class="form__error">{e}</p> })}
                                </div>

                                <div class="form__group">
                                    <label class="form__label" for="task-description">"Add a description"</label>
                                    <textarea
                                        id="task-description"
                                        class="form__textarea"
                                        rows="6"
                                        placeholder="Type your description here..."
                                        prop:value=move || form.with(|f| f.description.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.description = value);
                                        }
                                    ></textarea>
                                </div>
                            </div>

                            <div class="task-form__column">
                                <Select
                                    id="task-assignees"
                                    label="Assignees"
                                    placeholder="Unassigned"
                                    value=Signal::derive(move || form.with(|f| f.assignee.clone().unwrap_or_default()))
                                    options=Signal::derive(assignee_options)
                                    on_change=Callback::new(move |value: String| {
                                        form.update(|f| f.assignee = (!value.is_empty()).then_some(value));
                                    })
                                />
                                <Select
                                    id="task-labels"
                                    label="Labels"
                                    placeholder="None yet"
                                    value=Signal::derive(move || {
                                        form.with(|f| f.label.map(|l| l.value().to_string()).unwrap_or_default())
                                    })
                                    options=Signal::derive(label_options)
                                    on_change=Callback::new(move |value: String| {
                                        form.update(|f| f.label = TaskLabel::from_value(&value));
                                    })
                                />
                                <Select
                                    id="task-priority"
                                    label="Priority"
                                    placeholder="Select priority"
                                    value=Signal::derive(move || {
                                        form.with(|f| f.priority.map(|p| p.value().to_string()).unwrap_or_default())
                                    })
                                    options=Signal::derive(priority_options)
                                    error=error_for(TaskField::Priority)
                                    on_change=Callback::new(move |value: String| {
                                        form.update(|f| f.priority = TaskPriority::from_value(&value));
                                    })
                                />
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <label class="task-form__more">
                            <input
                                type="checkbox"
                                prop:checked=move || create_more.get()
                                on:change=move |ev| create_more.set(event_target_checked(&ev))
                            />
                            "Create more"
                        </label>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                            "Create"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_round_trip() {
        for (value, _) in priority_options() {
            assert!(TaskPriority::from_value(&value).is_some());
        }
        for (value, _) in label_options() {
            assert!(TaskLabel::from_value(&value).is_some());
        }
        assert_eq!(assignee_options()[0], ("jackson-lee".to_string(), "Jackson Lee".to_string()));
    }

    #[test]
    fn test_empty_option_clears_priority() {
        let mut form = TaskForm {
            priority: Some(TaskPriority::High),
            ..Default::default()
        };
        form.priority = TaskPriority::from_value("");
        assert_eq!(
            form.validate().unwrap_err(),
            vec![TaskFormError::TitleRequired, TaskFormError::PriorityRequired]
        );
    }
}
