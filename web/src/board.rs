use gloo::timers::callback::Timeout;
use jeopardy_core as trivia;
use trivia::{
    BoardConfig, BoardController, CellClass, CellPos, Coord, FillStatus, FillTicket,
    NetworkError, Scheduler, SurfaceModel,
};
use yew::html::Scope;
use yew::prelude::*;

use crate::client::JServiceClient;

/// Arms retries as browser timeouts that message the board view when they fire.
pub(crate) struct RetryTimer {
    link: Scope<BoardView>,
}

impl Scheduler for RetryTimer {
    type Handle = Timeout;

    fn schedule_retry(&mut self, delay_ms: u32) -> Timeout {
        let link = self.link.clone();
        Timeout::new(delay_ms, move || link.send_message(Msg::Retry))
    }
}

pub(crate) enum Msg {
    Start,
    Retry,
    Filled(FillTicket, Result<trivia::Board, NetworkError>),
    Reveal(CellPos),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: Coord,
    col: Coord,
    text: AttrValue,
    class: CellClass,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CellPos>,
}

fn cell_classes(class: CellClass, locked: bool) -> Classes {
    classes!(class.name(), locked.then_some("locked"))
}

/// Click handler for an unlocked cell; answered cells get none.
fn cell_onclick(pos: CellPos, locked: bool, callback: Callback<CellPos>) -> Option<Callback<MouseEvent>> {
    (!locked).then(|| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("{} click", pos);
            callback.emit(pos);
        })
    })
}

const fn start_label(has_board: bool) -> &'static str {
    if has_board { "Restart" } else { "Start!" }
}

#[function_component(ClueCell)]
fn clue_cell(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        text,
        class,
        locked,
        callback,
    } = props.clone();

    let class = cell_classes(class, locked);
    let onclick = cell_onclick(CellPos::new(row, col), locked, callback);

    html! {
        <td {class} {onclick} data-row={row.to_string()} data-col={col.to_string()}>{text}</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub client: JServiceClient,
}

pub(crate) struct BoardView {
    controller: BoardController<SurfaceModel, RetryTimer>,
    client: JServiceClient,
}

impl BoardView {
    fn spawn_fill(&self, ctx: &Context<Self>, ticket: FillTicket) {
        let client = self.client.clone();
        let config = *self.controller.config();
        ctx.link().send_future(async move {
            let result = trivia::fetch_board(&client, &config).await;
            Msg::Filled(ticket, result)
        });
    }

    fn view_header(&self) -> Html {
        let header = self.controller.display().header();
        if header.is_empty() {
            return html! {};
        }

        html! {
            <tr>
                { for header.iter().map(|title| html! { <th>{title.clone()}</th> }) }
            </tr>
        }
    }

    fn view_body(&self, ctx: &Context<Self>) -> Html {
        let surface = self.controller.display();
        let (rows, cols) = surface.size();
        let callback = ctx.link().callback(Msg::Reveal);

        html! {
            <>
            {
                for (0..rows).map(|row| html! {
                <tr>
                    {
                        for (0..cols).filter_map(|col| {
                            let cell = surface.cell(CellPos::new(row, col))?;
                            let text = AttrValue::from(cell.text.clone());
                            let class = cell.class;
                            let locked = cell.is_locked();
                            let callback = callback.clone();
                            Some(html! {
                                <ClueCell {row} {col} {text} {class} {locked} {callback}/>
                            })
                        })
                    }
                </tr>
                })
            }
            </>
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let scheduler = RetryTimer {
            link: ctx.link().clone(),
        };
        Self {
            controller: BoardController::new(BoardConfig::default(), SurfaceModel::new(), scheduler),
            client: ctx.props().client.clone(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                let ticket = self.controller.start();
                self.spawn_fill(ctx, ticket);
                true
            }
            Retry => {
                let ticket = self.controller.retry();
                self.spawn_fill(ctx, ticket);
                true
            }
            Filled(ticket, result) => {
                if let FillStatus::RetryScheduled { delay_ms } = self.controller.complete(ticket, result) {
                    log::info!("next attempt in {} ms", delay_ms);
                }
                true
            }
            Reveal(pos) => match self.controller.handle_click(pos) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::warn!("click at {}: {}", pos, err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let surface = self.controller.display();
        let loading = surface.is_loading();
        let error = surface.error();
        let start_label = start_label(self.controller.board().is_some());
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });

        html! {
            <div class="jeopardy">
                <nav>
                    <button id="start" onclick={cb_start}>{start_label}</button>
                </nav>
                <div id="spin-container" hidden={!loading}>
                    <span class="spinner"/>
                </div>
                <p id="error-message" role="alert" hidden={error.is_none()}>
                    {error.unwrap_or_default()}
                </p>
                <table id="jeopardy">
                    <thead>{self.view_header()}</thead>
                    <tbody>{self.view_body(ctx)}</tbody>
                </table>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_button_turns_into_restart_once_a_board_exists() {
        assert_eq!(start_label(false), "Start!");
        assert_eq!(start_label(true), "Restart");
    }

    #[test]
    fn answered_cell_has_no_click_handler() {
        let pos = CellPos::new(2, 3);
        let callback = Callback::from(|_: CellPos| ());

        assert!(cell_onclick(pos, true, callback.clone()).is_none());
        assert!(cell_onclick(pos, false, callback).is_some());
    }

    #[test]
    fn cell_classes_carry_state_and_lock() {
        assert_eq!(
            cell_classes(CellClass::Unrevealed, false),
            classes!("unrevealed")
        );
        assert_eq!(
            cell_classes(CellClass::Answer, true),
            classes!("answer", "locked")
        );
    }

    #[test]
    fn lock_follows_the_answered_cell() {
        let mut cell = trivia::CellView::placeholder();
        assert!(!cell.is_locked());

        cell.class = CellClass::Question;
        assert!(!cell.is_locked());

        cell.class = CellClass::Answer;
        assert!(cell.is_locked());
        assert!(cell_onclick(CellPos::new(0, 0), cell.is_locked(), Callback::noop()).is_none());
    }
}
