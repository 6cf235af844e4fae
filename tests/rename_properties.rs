/// Property tests for the rename engine
///
/// These cover the "for all tables and inputs" guarantees:
/// - identity tables leave FASTA files byte-identical
/// - headers with exactly one contained old ID are rewritten, nothing else changes
/// - headers with several contained old IDs fail the run with every candidate listed
/// - any table row without exactly two fields rejects the table
use proptest::prelude::*;
use seqrename::{
    FastaAdapter, MappingEntry, MappingTable, MatchStrategy, RenameError, RewriteEngine, RunStatus,
};
use std::io::Cursor;
use std::path::Path;

fn run_fasta(table: MappingTable, input: &str) -> (String, seqrename::core::RunOutcome) {
    let engine = RewriteEngine::new(table, MatchStrategy::Contains);
    let mut output = Vec::new();
    let outcome = engine
        .run(Cursor::new(input.to_string()), &FastaAdapter::new(), &mut output)
        .unwrap();
    (String::from_utf8(output).unwrap(), outcome)
}

fn sequence_line() -> impl Strategy<Value = String> {
    "[ACGT]{1,60}"
}

/// Fixed-width ids can never be substrings of one another
fn id_for(index: usize) -> String {
    format!("seq{:05}|", index)
}

proptest! {
    #[test]
    fn identity_table_round_trips(
        bodies in prop::collection::vec(prop::collection::vec(sequence_line(), 0..4), 1..20),
        crlf in any::<bool>(),
    ) {
        let ending = if crlf { "\r\n" } else { "\n" };
        let mut input = String::new();
        let mut entries = Vec::new();
        for (i, body) in bodies.iter().enumerate() {
            input.push('>');
            input.push_str(&id_for(i));
            input.push_str(ending);
            for line in body {
                input.push_str(line);
                input.push_str(ending);
            }
            entries.push(MappingEntry::new(id_for(i), id_for(i)));
        }

        let (output, outcome) = run_fasta(MappingTable::from_entries(entries), &input);
        prop_assert_eq!(output, input);
        prop_assert_eq!(outcome.status, RunStatus::Success);
        prop_assert!(outcome.diagnostics.no_matches().is_empty());
    }

    #[test]
    fn unique_containment_rewrites_only_headers(
        records in prop::collection::vec(
            (0usize..5, "[a-z_]{0,8}", prop::collection::vec(sequence_line(), 1..3)),
            1..15,
        ),
    ) {
        let entries: Vec<MappingEntry> = (0..5)
            .map(|i| MappingEntry::new(id_for(i), format!("NEW{}", i)))
            .collect();

        let mut input = String::new();
        let mut expected = String::new();
        for (target, suffix, body) in &records {
            input.push_str(&format!(">{}{}\n", id_for(*target), suffix));
            expected.push_str(&format!(">NEW{}\n", target));
            for line in body {
                input.push_str(line);
                input.push('\n');
                expected.push_str(line);
                expected.push('\n');
            }
        }

        let (output, outcome) = run_fasta(MappingTable::from_entries(entries), &input);
        prop_assert_eq!(output, expected);
        prop_assert_eq!(outcome.stats.renamed, records.len());
    }

    #[test]
    fn unmatched_headers_pass_through_with_warning(
        header in "[a-z]{1,12}",
    ) {
        let table = MappingTable::from_entries([MappingEntry::new("GENE", "X")]);
        let input = format!(">{}\nACGT\n", header);

        let (output, outcome) = run_fasta(table, &input);
        prop_assert_eq!(output, input);
        prop_assert_eq!(outcome.diagnostics.no_matches(), &[header][..]);
        prop_assert_eq!(outcome.status, RunStatus::Success);
    }

    #[test]
    fn multiple_containment_fails_with_all_candidates(
        picked in prop::sample::subsequence((0usize..6).collect::<Vec<_>>(), 2..=6),
    ) {
        let entries: Vec<MappingEntry> = (0..6)
            .map(|i| MappingEntry::new(id_for(i), format!("NEW{}", i)))
            .collect();
        // Mention the picked ids in reverse so candidate order must come from the table
        let header: String = picked.iter().rev().map(|i| id_for(*i)).collect();
        let input = format!(">{}\nACGT\n", header);

        let (output, outcome) = run_fasta(MappingTable::from_entries(entries), &input);
        let expected: Vec<String> = picked.iter().map(|i| format!("NEW{}", i)).collect();

        prop_assert_eq!(output, input);
        prop_assert_eq!(outcome.status, RunStatus::Failure);
        prop_assert_eq!(&outcome.diagnostics.ambiguous()[header.as_str()], &expected);
    }

    #[test]
    fn rows_without_two_fields_reject_table(
        good_before in prop::collection::vec(("[a-z0-9]{1,8}", "[A-Z0-9]{1,8}"), 0..5),
        bad_fields in prop::collection::vec("[a-z0-9]{0,6}", 1..6)
            .prop_filter("not a two-field row", |fields| fields.len() != 2),
    ) {
        let mut content = String::new();
        for (old_id, new_id) in &good_before {
            content.push_str(&format!("{}\t{}\n", old_id, new_id));
        }
        content.push_str(&bad_fields.join("\t"));
        content.push('\n');

        let result = MappingTable::from_reader(Cursor::new(content), Path::new("table.tsv"));
        match result {
            Err(RenameError::InvalidTableFormat { line, fields, .. }) => {
                prop_assert_eq!(line, good_before.len() + 1);
                prop_assert_eq!(fields, bad_fields.len());
            }
            other => prop_assert!(false, "expected InvalidTableFormat, got {:?}", other),
        }
    }
}

#[test]
fn gene_table_example_end_to_end() {
    let table = MappingTable::from_entries([
        MappingEntry::new("gene1", "GENEA"),
        MappingEntry::new("gene2", "GENEB"),
    ]);
    let input = ">gene1_transcript\nAAA\n>unknown_seq\nCCC\n>gene1_gene2combo\nGGG\n";

    let (output, outcome) = run_fasta(table, input);

    assert_eq!(
        output,
        ">GENEA\nAAA\n>unknown_seq\nCCC\n>gene1_gene2combo\nGGG\n"
    );
    assert_eq!(outcome.diagnostics.no_matches(), ["unknown_seq".to_string()]);
    assert_eq!(
        outcome.diagnostics.ambiguous()["gene1_gene2combo"],
        vec!["GENEA".to_string(), "GENEB".to_string()]
    );
    assert_eq!(outcome.status, RunStatus::Failure);
}
