//! FetchSessionScheduleHandler - Fetches and parses one session's timetable.

use std::sync::Arc;

use crate::domain::foundation::PortalCookie;
use crate::domain::schedule::{RowParser, Session, SessionFetchError, SessionSchedule};
use crate::ports::{TimetablePageParser, TimetablePortal};

/// Handler that turns one session into a parsed schedule.
pub struct FetchSessionScheduleHandler {
    portal: Arc<dyn TimetablePortal>,
    parser: Arc<dyn TimetablePageParser>,
    schedule_url: String,
}

impl FetchSessionScheduleHandler {
    pub fn new(
        portal: Arc<dyn TimetablePortal>,
        parser: Arc<dyn TimetablePageParser>,
        schedule_url: impl Into<String>,
    ) -> Self {
        Self {
            portal,
            parser,
            schedule_url: schedule_url.into(),
        }
    }

    /// Fetches the session page and runs a fresh row parser over its table.
    pub async fn handle(
        &self,
        cookie: &PortalCookie,
        session: Session,
    ) -> Result<SessionSchedule, SessionFetchError> {
        let url = session_url(&self.schedule_url, &session.locator);

        let html = match self.portal.fetch_page(cookie, &url).await {
            Ok(html) => html,
            Err(source) => return Err(SessionFetchError::new(session.name, source)),
        };

        let subjects = RowParser::parse_rows(self.parser.table_rows(&html));
        let schedule = SessionSchedule::new(session, subjects);
        tracing::debug!(
            session = %schedule.session.name,
            subjects = schedule.subject_count(),
            "Parsed session timetable"
        );

        Ok(schedule)
    }
}

/// Address of a session page: the base address with the locator appended.
pub fn session_url(base: &str, locator: &str) -> String {
    format!("{}{}", base, locator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::markup::HtmlTimetableParser;
    use crate::adapters::portal::MockPortal;
    use crate::ports::PortalError;

    const BASE: &str = "https://portal.test/schedule";

    const PAGE: &str = r#"
        <div class="box-body"><table class="table table-hover">
          <tr><th>Code</th></tr>
          <tr><td>CSCI 1301</td><td>COMPUTING</td><td>3</td><td>3</td><td>-</td>
              <td>M-W</td><td>800-920</td><td>ICT LAB 1</td><td>DR. AMIR</td></tr>
          <tr><td>TH</td><td>1400-1520</td><td>LH 2</td><td>DR. SITI</td></tr>
        </table></div>
    "#;

    fn session() -> Session {
        Session::new("?ses=2024/2025&sem=1", "2024/2025 Sem 1")
    }

    fn cookie() -> PortalCookie {
        PortalCookie::new("cookie").unwrap()
    }

    #[test]
    fn session_url_appends_locator() {
        assert_eq!(
            session_url(BASE, "?ses=2024/2025&sem=1"),
            "https://portal.test/schedule?ses=2024/2025&sem=1"
        );
    }

    #[tokio::test]
    async fn parses_subjects_from_session_page() {
        let portal = MockPortal::new().with_page(session_url(BASE, &session().locator), PAGE);
        let handler =
            FetchSessionScheduleHandler::new(Arc::new(portal), Arc::new(HtmlTimetableParser::new()), BASE);

        let schedule = handler.handle(&cookie(), session()).await.unwrap();
        assert_eq!(schedule.session, session());
        assert_eq!(schedule.subjects.len(), 2);
        assert_eq!(schedule.subjects[1].course_code, "CSCI 1301");
        assert_eq!(schedule.subjects[1].venue, "LH 2");
    }

    #[tokio::test]
    async fn fetch_failure_names_the_session() {
        let portal = MockPortal::new()
            .with_error(session_url(BASE, &session().locator), PortalError::network("reset"));
        let handler =
            FetchSessionScheduleHandler::new(Arc::new(portal), Arc::new(HtmlTimetableParser::new()), BASE);

        let err = handler.handle(&cookie(), session()).await.unwrap_err();
        assert_eq!(err.session_name, "2024/2025 Sem 1");
        assert_eq!(err.source, PortalError::network("reset"));
    }
}
