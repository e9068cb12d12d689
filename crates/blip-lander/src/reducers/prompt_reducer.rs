use crate::actions::{Action, PromptAction};
use crate::state::PromptState;

/// Reducer for the prompt line
///
/// `Submit` is consumed by the prompt middleware, which dispatches `Cancel`
/// once the input has been turned into an action.
pub fn reduce(mut state: PromptState, action: &Action) -> PromptState {
    let Action::Prompt(prompt) = action else {
        return state;
    };

    match prompt {
        PromptAction::Open => {
            state.open = true;
            state.input.clear();
        }
        PromptAction::Char(c) => {
            if state.open {
                state.input.push(*c);
            }
        }
        PromptAction::Backspace => {
            state.input.pop();
        }
        PromptAction::Cancel => {
            state.open = false;
            state.input.clear();
        }
        PromptAction::Submit => {}
    }

    state
}
