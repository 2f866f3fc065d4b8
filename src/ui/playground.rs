/// Demonstration page: every section carries the annotations for its defects

use crate::catalog::{self, Section};
use crate::config::OverlayConfig;
use crate::ui::overlay::{BugIndicator, OverlayProvider};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: OverlayConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let show_interactive = use_state(|| true);

    let on_toggle_interactive = {
        let show_interactive = show_interactive.clone();
        Callback::from(move |_| {
            show_interactive.set(!*show_interactive);
        })
    };

    let sections = Section::ALL.iter().filter(|section| {
        **section != Section::Interactive || *show_interactive
    });

    html! {
        <OverlayProvider config={props.config.clone()}>
            <div class="playground" style="min-height: 100vh; background-color: #f9fafb;">
                <div class="instructions" style="background-color: #4338ca; color: white; padding: 40px 16px;">
                    <h1 style="font-size: 36px; margin: 0 0 8px 0;">{"Replay Debugging Playground"}</h1>
                    <p style="font-size: 18px; color: #c7d2fe; margin: 0 0 24px 0;">
                        {"Take the Replay chrome extension for a test drive."}
                    </p>
                    <ol class="instruction-steps">
                        <li>{"Install the Replay extension"}</li>
                        <li>{"Launch the extension while viewing this page"}</li>
                        <li>{"Ask the agent to fix one of the issues"}</li>
                    </ol>
                </div>

                <div class="sections" style="max-width: 1152px; margin: 0 auto; padding: 48px 16px;">
                    <Alert r#type={AlertType::Info} title={"Every red dot marks a known defect"} inline={true}>
                        {"Click a dot to read about the bug it marks. Click it again, press the close button or click anywhere else to hide the description."}
                    </Alert>

                    {for sections.map(|section| html! {
                        <SectionView key={section.anchor_id()} section={*section} />
                    })}

                    <div class="section-toggle" style="margin-top: 24px;">
                        <Button onclick={on_toggle_interactive} variant={ButtonVariant::Secondary}>
                            {if *show_interactive { "Hide Quick Actions" } else { "Show Quick Actions" }}
                        </Button>
                    </div>
                </div>

                <footer class="footer" style="background-color: #111827; color: #9ca3af; padding: 32px 16px; text-align: center;">
                    {format!("{} annotated defects across {} sections", catalog::annotations().len(), Section::ALL.len())}
                </footer>
            </div>

            // Shared render target: absolute at the document origin, above everything
            <div
                id={props.config.target_id.clone()}
                class="annotation-root"
                style="position: absolute; top: 0; left: 0; width: 0; height: 0; overflow: visible;"
            ></div>
        </OverlayProvider>
    }
}

#[derive(Properties, PartialEq)]
struct SectionViewProps {
    section: Section,
}

#[function_component(SectionView)]
fn section_view(props: &SectionViewProps) -> Html {
    let annotations = catalog::for_section(props.section);

    // the pricing cards sit in a clipping, stacked container: the markers must
    // still show because they render outside of it
    let container_style = if props.section == Section::Pricing {
        "position: relative; z-index: 1; overflow: hidden; max-height: 400px; display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px;"
    } else {
        "display: flex; flex-direction: column; gap: 12px;"
    };

    html! {
        <section id={props.section.anchor_id()} class="playground-section" style="margin-top: 64px;">
            <h2 style="font-size: 24px; font-weight: bold; color: #111827; margin: 0 0 24px 0;">
                {props.section.title()}
            </h2>
            <div class="section-body" style={container_style}>
                {for annotations.iter().map(|annotation| html! {
                    <div
                        key={annotation.id}
                        class="annotated-item"
                        style="background-color: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;"
                    >
                        <span class="annotated-label" style="font-weight: 500; color: #374151;">
                            {annotation.label}
                        </span>
                        <BugIndicator description={annotation.description} />
                    </div>
                })}
            </div>
        </section>
    }
}
