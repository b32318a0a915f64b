use crate::api::JService;
use crate::utils::random_seed;
use clap::Args;
use trivia_core as trivia;
use yew::prelude::*;

/// Face of a clue that has not been revealed yet.
const HIDDEN_FACE: &str = "?";

fn cell_text(clue: &trivia::Clue) -> &str {
    clue.shown_text().unwrap_or(HIDDEN_FACE)
}

const fn state_class(state: trivia::RevealState) -> &'static str {
    use trivia::RevealState::*;
    match state {
        Hidden => "hidden",
        Question => "question",
        Answer => "answer",
    }
}

fn error_message(err: &trivia::GameError) -> &'static str {
    use trivia::GameError::*;
    match err {
        DataSource(_) => "Could not reach the trivia service, please try again.",
        InsufficientData { .. } => "Not enough trivia to fill the board, please try again.",
        InvalidAddress => "Sorry, there's a missing question.",
    }
}

fn progress_text(board: &trivia::Board) -> String {
    if board.is_complete() {
        return "Every answer is on the board!".to_string();
    }
    let (categories, clues) = board.size();
    let total = usize::from(categories) * usize::from(clues);
    format!("{} of {} clues opened", board.revealed_count(), total)
}

/// Seed for the load behind `ticket`, fixed seeds advance once per restart.
fn seed_for(fixed: Option<u64>, ticket: trivia::LoadTicket) -> u64 {
    match fixed {
        Some(seed) => seed.wrapping_add(ticket.generation().saturating_sub(1)),
        None => random_seed(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartGame,
    BoardLoaded(trivia::LoadTicket, trivia::Result<trivia::Board>),
    CellClicked(trivia::CellAddress),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    address: trivia::CellAddress,
    state: trivia::RevealState,
    text: String,
    callback: Callback<trivia::CellAddress>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        address,
        state,
        text,
        callback,
    } = props.clone();

    let class = classes!("clue", state_class(state));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{:?} clicked", address);
        callback.emit(address);
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of categories on the board
    #[arg(long, default_value_t = trivia::BoardConfig::DEFAULT_CATEGORIES)]
    pub categories: trivia::Ix,

    /// Number of clues per category
    #[arg(long, default_value_t = trivia::BoardConfig::DEFAULT_CLUES_PER_CATEGORY)]
    pub clues: trivia::Ix,

    /// Base URL of the trivia service
    #[arg(long, default_value = JService::DEFAULT_BASE_URL)]
    pub api_url: String,
}

#[derive(Debug)]
pub(crate) struct BoardView {
    controller: trivia::BoardController,
    provider: JService,
    config: trivia::BoardConfig,
    seed: Option<u64>,
}

impl BoardView {
    fn start_game(&mut self, ctx: &Context<Self>) {
        let ticket = self.controller.begin_load();
        let seed = seed_for(self.seed, ticket);
        let provider = self.provider.clone();
        let config = self.config;
        log::debug!("load {} with seed {}", ticket.generation(), seed);

        ctx.link().send_future(async move {
            let result = trivia::RandomBoardLoader::new(seed)
                .load(&provider, config)
                .await;
            Msg::BoardLoaded(ticket, result)
        });
    }

    fn reveal_cell(&mut self, address: trivia::CellAddress) -> bool {
        match self.controller.reveal(address) {
            Ok(outcome) => {
                log::debug!("reveal {:?}: {:?}", address, outcome.content());
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("ignoring click on {:?}: {}", address, err);
                false
            }
        }
    }

    fn start_label(&self) -> &'static str {
        if self.controller.board().is_none() && !self.controller.state().is_loading() {
            "Start!"
        } else {
            "Restart!"
        }
    }

    fn view_board(&self, ctx: &Context<Self>, board: &trivia::Board) -> Html {
        let (categories, clues) = board.size();
        let callback = ctx.link().callback(Msg::CellClicked);

        html! {
            <>
                <table id="jeopardy">
                    <thead>
                        <tr>
                            { for board.titles().map(|title| html! { <th>{title.to_owned()}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for (0..clues).map(|row| html! {
                                <tr>
                                    {
                                        for (0..categories).map(|category| {
                                            let address = (category, row);
                                            board.clue_at(address).map_or_else(Html::default, |clue| html! {
                                                <CellView
                                                    {address}
                                                    state={clue.state()}
                                                    text={cell_text(clue).to_owned()}
                                                    callback={callback.clone()}
                                                />
                                            })
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
                <aside>{progress_text(board)}</aside>
            </>
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            controller: trivia::BoardController::new(),
            provider: JService::new(&props.api_url),
            config: trivia::BoardConfig::new(props.categories, props.clues),
            seed: props.seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartGame => {
                self.start_game(ctx);
                true
            }
            BoardLoaded(ticket, result) => self.controller.finish_load(ticket, result).has_update(),
            CellClicked(address) => self.reveal_cell(address),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.controller.state().is_loading();
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::StartGame
        });

        html! {
            <div class="trivia">
                <nav>
                    <button id="start" onclick={cb_start}>{self.start_label()}</button>
                </nav>
                if loading {
                    <div id="spin-container"><i class="spinner"/></div>
                }
                if let Some(err) = self.controller.last_error() {
                    <p class="error">{error_message(err)}</p>
                }
                if !loading {
                    if let Some(board) = self.controller.board() {
                        {self.view_board(ctx, board)}
                    }
                }
            </div>
        }
    }
}
