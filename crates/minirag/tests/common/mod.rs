use minirag_core::Document;
use std::path::Path;

pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(
            "handbook/onboarding.md",
            "Welcome to the team.\n\nYour laptop arrives on day one. Install the VPN client \
             before connecting to the staging cluster.\n\nAsk in the help channel if the VPN \
             certificate expires.",
        ),
        Document::new(
            "handbook/expenses.md",
            "Submit expenses within thirty days. Receipts are required for every purchase \
             above twenty euros.\n\nTravel expenses need manager approval.",
        ),
        Document::new(
            "runbooks/staging.txt",
            "The staging cluster restarts nightly. If deploys fail, check the cluster \
             dashboard and retry the deploy pipeline.",
        ),
    ]
}

pub fn write_documents(root: &Path, documents: &[Document]) {
    for doc in documents {
        let path = root.join(&doc.source);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, &doc.text).unwrap();
    }
}
