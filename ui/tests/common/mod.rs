use std::time::Duration;

use egui_kittest::Harness;
use userdeck_ui::UserDeckApp;
use userdeck_ui::state::State;
use wiremock::Mock;
use wiremock::matchers::{method, path};
use wiremock::{MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, UserDeckApp>,
}

impl<'a> TestCtx<'a> {
    /// App whose users endpoint answers with the ten sample users.
    pub async fn new_app() -> Self {
        Self::new_app_with_response(ResponseTemplate::new(200).set_body_json(sample_users())).await
    }

    /// App whose users endpoint answers with an empty body and `status_code`.
    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::new_app_with_response(ResponseTemplate::new(status_code)).await
    }

    #[allow(unused)]
    pub async fn new_app_with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let state = State::test(format!("{}/users", mock_server.uri()));
        let app = UserDeckApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, UserDeckApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, UserDeckApp> {
        &self.harness
    }

    /// Steps frames, yielding to the runtime between them, until `done`
    /// holds or the attempts run out. Returns whether `done` held.
    pub async fn step_until(&mut self, done: impl Fn(&Harness<'a, UserDeckApp>) -> bool) -> bool {
        for _ in 0..50 {
            self.harness.step();
            if done(&self.harness) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }

    /// Clicks `Fetch Data` and waits until the request has settled.
    pub async fn fetch(&mut self) -> bool {
        use kittest::Queryable as _;

        self.harness.get_by_label("Fetch Data").click();
        self.step_until(|harness| !harness.state().state().user_table().is_fetching())
            .await
    }
}

/// Ten users shaped like the public endpoint's records.
pub fn sample_users() -> serde_json::Value {
    serde_json::json!([
        { "id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz", "website": "hildegard.org" },
        { "id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "website": "anastasia.net" },
        { "id": 3, "name": "Clementine Bauch", "email": "Nathan@yesenia.net", "website": "ramiro.info" },
        { "id": 4, "name": "Patricia Lebsack", "email": "Julianne.OConner@kory.org", "website": "kale.biz" },
        { "id": 5, "name": "Chelsey Dietrich", "email": "Lucio_Hettinger@annie.ca", "website": "demarco.info" },
        { "id": 6, "name": "Mrs. Dennis Schulist", "email": "Karley_Dach@jasper.info", "website": "ola.org" },
        { "id": 7, "name": "Kurtis Weissnat", "email": "Telly.Hoeger@billy.biz", "website": "elvis.io" },
        { "id": 8, "name": "Nicholas Runolfsdottir V", "email": "Sherwood@rosamond.me", "website": "jacynthe.com" },
        { "id": 9, "name": "Glenna Reichert", "email": "Chaim_McDermott@dana.io", "website": "conrad.com" },
        { "id": 10, "name": "Clementina DuBuque", "email": "Rey.Padberg@karina.biz", "website": "ambrose.net" }
    ])
}
