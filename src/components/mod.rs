//! Widgets and the shared terminal frame they render in.

pub mod activity_feed;
pub mod contribution_graph;

use yew::prelude::*;

pub use activity_feed::ActivityFeed;
pub use contribution_graph::ContributionGraph;

/// Terminal window chrome shared by both widgets.
#[derive(Properties, PartialEq)]
pub struct TerminalProps {
    pub prompt: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub aside: Html,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Terminal)]
pub fn terminal(props: &TerminalProps) -> Html {
    html! {
        <div class="terminal crt">
            <div class="terminal-head">
                <div class="terminal-title">
                    <span>{ format!("$ {}", props.prompt) }</span>
                    if props.busy {
                        <span class="spinner" aria-label="loading" />
                    }
                </div>
                { props.aside.clone() }
            </div>
            { props.children.clone() }
            <div class="cursor-line"><span class="cursor">{"_"}</span></div>
        </div>
    }
}
