use control_panel::components::{
    Component, Container, ContainerProps, ControlPanel, ControlPanelProps, Focus,
};
use control_panel::{render, App, ControlPanelAction, UserPreferences};
use flux_dispatch::testing::RenderHarness;

fn sizes() -> Vec<String> {
    vec!["small".into(), "large".into()]
}

#[test]
fn initial_screen_greets_jim_in_small_font() {
    let view = render(&UserPreferences::default());
    let sizes = sizes();
    let mut panel = ControlPanel::new(&view);
    let mut harness = RenderHarness::new(50, 16);

    let output = harness.render_to_string_plain(|frame| {
        let area = frame.area();
        panel.render(
            frame,
            area,
            ControlPanelProps {
                view: &view,
                font_sizes: &sizes,
                focus: Focus::UserName,
            },
        );
    });

    assert!(output.contains("Hello, Jim"), "{output}");
    assert!(output.contains("font-size: 16px"), "{output}");
    assert!(output.contains("(•) small"), "{output}");
    assert!(output.contains("( ) large"), "{output}");
}

#[test]
fn large_font_spreads_the_greeting() {
    let view = render(&UserPreferences {
        user_name: "Alice".into(),
        font_size: "large".into(),
    });
    let mut harness = RenderHarness::new(50, 8);

    let output = harness.render_to_string_plain(|frame| {
        let area = frame.area();
        Container.render(frame, area, ContainerProps { view: &view });
    });

    assert!(output.contains("H e l l o ,  A l i c e"), "{output}");
    assert!(output.contains("font-size: 24px"), "{output}");
}

#[test]
fn app_repaints_after_dispatch() {
    let mut app = App::default();
    let mut harness = RenderHarness::new(50, 16);

    app.dispatch(ControlPanelAction::user_name_update("Alice"))
        .unwrap();
    app.dispatch(ControlPanelAction::font_size_preference_update("large"))
        .unwrap();
    assert!(app.take_needs_repaint());

    let output = harness.render_to_string_plain(|frame| app.draw(frame));
    assert!(output.contains("(•) large"), "{output}");
    assert!(output.contains("font-size: 24px"), "{output}");
    assert!(output.contains("Alice"), "{output}");
}
