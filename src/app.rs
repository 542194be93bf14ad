//! Profile page: header, both GitHub widgets and the section panes.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::{ActivityFeed, ContributionGraph};
use crate::config::SiteConfig;
use crate::resume::{Education, Job, Project, Resume, SkillGroup, RESUME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    About,
    Projects,
    Skills,
    Experience,
    Education,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "ABOUT",
            Section::Projects => "PROJECTS",
            Section::Skills => "SKILLS",
            Section::Experience => "EXPERIENCE",
            Section::Education => "EDUCATION",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Section::About => "ABOUT.txt",
            Section::Projects => "PROJECTS.go",
            Section::Skills => "SKILLS.dat",
            Section::Experience => "EXPERIENCE.log",
            Section::Education => "EDUCATION.md",
        }
    }

    /// The section to switch to, or `None` when `next` is already active.
    pub fn select(self, next: Section) -> Option<Section> {
        (self != next).then_some(next)
    }
}

// Cosmetic blink of the name in the header.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Blink {
    on: bool,
}

impl Reducible for Blink {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Blink { on: !self.on })
    }
}

const BLINK_MS: u32 = 1000;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(SiteConfig::from_env);
    let active = use_state_eq(Section::default);
    let blink = use_reducer(|| Blink { on: true });

    {
        let dispatcher = blink.dispatcher();
        use_effect_with((), move |_| {
            let handle = Interval::new(BLINK_MS, move || dispatcher.dispatch(()));
            move || drop(handle)
        });
    }

    let resume = &RESUME;

    let nav = Section::ALL.into_iter().map(|section| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(next) = active.select(section) {
                    active.set(next);
                }
            })
        };
        let class = if *active == section { "nav-item active" } else { "nav-item" };
        html! {
            <li {class} {onclick}>{ format!("> {}", section.label()) }</li>
        }
    });

    let name_class = if blink.on { "name" } else { "name dimmed" };
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="page crt-screen">
            <div class="container">
                <header class="header">
                    <h1><span class={name_class}>{ resume.personal.name }</span></h1>
                    <p class="subtitle">{ format!("> {}", resume.personal.title) }</p>
                    <div class="contact">
                        <a href={resume.personal.mailto()}>{ resume.personal.email }</a>
                        <a
                            href={resume.personal.github_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"GitHub"}
                        </a>
                        <a
                            href={linkedin_search(resume.personal.linkedin)}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"LinkedIn"}
                        </a>
                    </div>
                </header>

                <ContributionGraph
                    username={config.username.clone()}
                    api_base={config.api_base.clone()}
                    token={config.token.clone().map(AttrValue::from)}
                />
                <ActivityFeed
                    username={config.username.clone()}
                    api_base={config.api_base.clone()}
                    web_host={config.web_host.clone()}
                />

                <nav class="nav">
                    <ul>{ for nav }</ul>
                </nav>

                <main>
                    <section>
                        <h2>{ active.file_name() }</h2>
                        { pane_for(*active, resume) }
                    </section>
                </main>

                <footer class="footer">
                    <p>{ format!("Made with Rust + Yew • {year}") }</p>
                </footer>
            </div>
        </div>
    }
}

/// Content of the one visible pane.
fn pane_for(section: Section, resume: &Resume) -> Html {
    match section {
        Section::About => about_pane(resume),
        Section::Projects => card_list(resume.projects.iter().map(project_card)),
        Section::Skills => skills_pane(resume.skills),
        Section::Experience => card_list(resume.experience.iter().map(job_card)),
        Section::Education => card_list(resume.education.iter().map(education_card)),
    }
}

fn linkedin_search(name: &str) -> String {
    format!(
        "https://www.linkedin.com/search/results/people/?keywords={}",
        name.replace(' ', "%20")
    )
}

fn about_pane(resume: &Resume) -> Html {
    html! {
        <div class="card">
            <p class="prose">{ resume.about }</p>
            <div class="languages">
                { for resume.languages.iter().map(|l| html! {
                    <div class="row">
                        <span class="dim">{">"}</span>
                        <span>{ format!("{}: {}", l.language, l.level) }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn card_list(cards: impl Iterator<Item = Html>) -> Html {
    html! { <div class="cards">{ for cards }</div> }
}

fn tags(items: &[&'static str]) -> Html {
    html! {
        <div class="tags">
            { for items.iter().map(|t| html! { <span class="tag">{ *t }</span> }) }
        </div>
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <div class="card">
            <div class="card-head">
                <h3>
                    if let Some(url) = project.url {
                        <a href={url} target="_blank" rel="noopener noreferrer">
                            { project.title }
                        </a>
                    } else {
                        { project.title }
                    }
                </h3>
                <span class="dim">{ project.date }</span>
            </div>
            <p class="prose">{ project.description }</p>
            { tags(project.technologies) }
        </div>
    }
}

fn job_card(job: &Job) -> Html {
    html! {
        <div class="card">
            <div class="card-head">
                <h3>{ format!("{} @ {}", job.title, job.company) }</h3>
                <span class="dim">{ job.period }</span>
            </div>
            <div class="dim small">{ job.location }</div>
            <p class="prose">{ job.description }</p>
            { tags(job.skills) }
        </div>
    }
}

fn education_card(edu: &Education) -> Html {
    html! {
        <div class="card">
            <div class="card-head">
                <h3>{ edu.institution }</h3>
                <span class="dim">{ edu.period }</span>
            </div>
            if let Some(degree) = edu.degree {
                <div>{ degree }</div>
            }
            <div class="dim">{ edu.field }</div>
            <div class="dim small">{ edu.location }</div>
        </div>
    }
}

fn skills_pane(groups: &[SkillGroup]) -> Html {
    html! {
        <div class="card">
            { for groups.iter().map(|g| html! {
                <div class="skill-group">
                    <h3>{ g.category }</h3>
                    <div class="skill-grid">
                        { for g.items.iter().map(|s| html! {
                            <div class="row">
                                <span class="dim">{">"}</span>
                                <span>{ *s }</span>
                            </div>
                        }) }
                    </div>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_is_the_default_section() {
        assert_eq!(Section::default(), Section::About);
    }

    #[test]
    fn nav_lists_each_section_once() {
        for s in Section::ALL {
            assert_eq!(Section::ALL.iter().filter(|o| **o == s).count(), 1);
        }
    }

    #[test]
    fn labels_and_file_names() {
        let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["ABOUT", "PROJECTS", "SKILLS", "EXPERIENCE", "EDUCATION"]);
        assert_eq!(Section::About.file_name(), "ABOUT.txt");
        assert_eq!(Section::Projects.file_name(), "PROJECTS.go");
        assert_eq!(Section::Skills.file_name(), "SKILLS.dat");
    }

    #[test]
    fn selecting_another_section_switches_to_it() {
        for from in Section::ALL {
            for to in Section::ALL {
                let expected = if from == to { None } else { Some(to) };
                assert_eq!(from.select(to), expected, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn reselecting_the_active_section_is_a_no_op() {
        let active = Section::Skills;
        assert_eq!(active.select(Section::Skills), None);
        assert_eq!(active.select(Section::Skills).unwrap_or(active), active);
    }

    #[test]
    fn each_section_shows_exactly_its_own_pane() {
        let expected = [
            (Section::About, about_pane(&RESUME)),
            (Section::Projects, card_list(RESUME.projects.iter().map(project_card))),
            (Section::Skills, skills_pane(RESUME.skills)),
            (Section::Experience, card_list(RESUME.experience.iter().map(job_card))),
            (Section::Education, card_list(RESUME.education.iter().map(education_card))),
        ];
        for (section, pane) in &expected {
            let shown = pane_for(*section, &RESUME);
            assert_eq!(&shown, pane, "{section:?}");
            for (other, other_pane) in &expected {
                if other != section {
                    assert_ne!(&shown, other_pane, "{section:?} vs {other:?}");
                }
            }
        }
    }

    #[test]
    fn blink_toggles() {
        let b = Rc::new(Blink { on: true });
        let b = b.reduce(());
        assert!(!b.on);
        assert!(b.reduce(()).on);
    }

    #[test]
    fn linkedin_link_encodes_spaces() {
        assert_eq!(
            linkedin_search("David Bucur"),
            "https://www.linkedin.com/search/results/people/?keywords=David%20Bucur"
        );
    }
}
