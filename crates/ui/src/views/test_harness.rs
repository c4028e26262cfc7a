use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{
    CameraError, CameraSource, RunTestRequest, StimulusTestController, SubmitError, TestSubmitter,
};
use stimulus_core::model::PatientName;
use stimulus_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::test::{TestPanel, run_test};
use crate::views::{TestView, use_stimulus_view};

pub struct StubCamera(pub Result<(), CameraError>);

#[async_trait(?Send)]
impl CameraSource for StubCamera {
    async fn open_preview(&self) -> Result<(), CameraError> {
        self.0.clone()
    }
}

struct AcceptingSubmitter;

#[async_trait]
impl TestSubmitter for AcceptingSubmitter {
    async fn submit(&self, _request: &RunTestRequest) -> Result<(), SubmitError> {
        Ok(())
    }

    fn results_url(&self, patient: &PatientName) -> String {
        format!("/results/{patient}")
    }
}

struct IgnoreLinks;

impl UiLinkOpener for IgnoreLinks {
    fn open_url(&self, _url: &str) {}
}

struct TestApp {
    controller: Arc<StimulusTestController>,
    camera: Arc<dyn CameraSource>,
}

impl UiApp for TestApp {
    fn controller(&self) -> Arc<StimulusTestController> {
        Arc::clone(&self.controller)
    }

    fn camera(&self) -> Arc<dyn CameraSource> {
        Arc::clone(&self.camera)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(IgnoreLinks)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn TestViewHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { TestView {} }
}

#[derive(Props, Clone)]
struct RunHarnessProps {
    app: Arc<TestApp>,
    names: Vec<String>,
}

impl PartialEq for RunHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Renders the test panel and starts one run per name, in order, on mount.
#[component]
fn RunHarness(props: RunHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let view = use_stimulus_view();
    let running = use_signal(|| false);
    use_hook(|| {
        let controller = ctx.controller();
        let names = props.names.clone();
        spawn(async move {
            for name in names {
                run_test(Arc::clone(&controller), name, view, running).await;
            }
        });
    });
    rsx! { TestPanel { view, running } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Drives the dom until `done` accepts a render, returning every render seen.
    pub async fn drive_until(
        &mut self,
        max_passes: usize,
        done: impl Fn(&str) -> bool,
    ) -> Vec<String> {
        let mut renders = Vec::new();
        for _ in 0..max_passes {
            self.drive_async().await;
            let html = self.render();
            let finished = done(&html);
            renders.push(html);
            if finished {
                break;
            }
        }
        renders
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn test_app(camera: StubCamera) -> Arc<TestApp> {
    let controller = StimulusTestController::new(fixed_clock(), Arc::new(AcceptingSubmitter));
    Arc::new(TestApp {
        controller: Arc::new(controller),
        camera: Arc::new(camera),
    })
}

pub fn setup_test_view(camera: StubCamera) -> ViewHarness {
    let app = test_app(camera);
    let dom = VirtualDom::new_with_props(TestViewHarness, HarnessProps { app });
    ViewHarness { dom }
}

/// Harness whose panel starts a run for each of `names` as soon as it mounts.
pub fn setup_run_view(names: &[&str]) -> ViewHarness {
    let app = test_app(StubCamera(Ok(())));
    let names = names.iter().map(|name| (*name).to_string()).collect();
    let dom = VirtualDom::new_with_props(RunHarness, RunHarnessProps { app, names });
    ViewHarness { dom }
}
