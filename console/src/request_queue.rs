use engine::{Document, DocumentId, DocumentStatus, Result, SearchServer};
use std::collections::VecDeque;

/// How many of the most recent requests the zero-result statistic covers.
const REQUEST_WINDOW: u64 = 1440;

/// Wraps a search server and tracks which of the most recent
/// [`REQUEST_WINDOW`] requests returned no documents.
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    no_result_times: VecDeque<u64>,
    requests_seen: u64,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        Self {
            server,
            no_result_times: VecDeque::new(),
            requests_seen: 0,
        }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.record(self.server.find_top_documents(raw_query))
    }

    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.record(self.server.find_top_documents_with_status(raw_query, status))
    }

    pub fn add_find_request_with_predicate<F>(
        &mut self,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<Document>>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        self.record(self.server.find_top_documents_with_predicate(raw_query, predicate))
    }

    /// Number of requests within the window that returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_times.len()
    }

    fn record(&mut self, result: Result<Vec<Document>>) -> Result<Vec<Document>> {
        self.requests_seen += 1;
        while self
            .no_result_times
            .front()
            .is_some_and(|&time| time + REQUEST_WINDOW <= self.requests_seen)
        {
            self.no_result_times.pop_front();
        }
        if let Ok(documents) = &result {
            if documents.is_empty() {
                tracing::debug!(request = self.requests_seen, "query returned no results");
                self.no_result_times.push_back(self.requests_seen);
            }
        }
        result
    }
}
