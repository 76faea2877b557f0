use crate::error::TakeoffError;
use crate::model::{BoqItem, RoomArea};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/><Override PartName="/xl/worksheets/sheet2.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/></Relationships>"#;

enum Cell {
    Text(String),
    Number(String),
}

/// Render the two-sheet workbook: "Rooms" (Room, Area (m²)) and "BOQ"
/// (Item, UoM, Quantity at 2 decimals). Inline strings throughout, so no
/// shared-strings part is needed. Empty input produces header-only sheets.
pub fn render_workbook(rooms: &[RoomArea], boq: &[BoqItem]) -> Result<Vec<u8>, TakeoffError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    write_part(&mut zip, "[Content_Types].xml", CONTENT_TYPES.as_bytes())?;
    write_part(&mut zip, "_rels/.rels", ROOT_RELS.as_bytes())?;
    write_part(&mut zip, "xl/workbook.xml", &render_workbook_part()?)?;
    write_part(
        &mut zip,
        "xl/_rels/workbook.xml.rels",
        WORKBOOK_RELS.as_bytes(),
    )?;

    let room_rows: Vec<Vec<Cell>> = rooms
        .iter()
        .map(|r| {
            vec![
                Cell::Text(r.room.clone()),
                Cell::Number(format!("{}", r.area_m2)),
            ]
        })
        .collect();
    let sheet1 = render_sheet(&["Room", "Area (m²)"], &room_rows)?;
    write_part(&mut zip, "xl/worksheets/sheet1.xml", &sheet1)?;

    let boq_rows: Vec<Vec<Cell>> = boq
        .iter()
        .map(|i| {
            vec![
                Cell::Text(i.item.clone()),
                Cell::Text(i.uom.to_string()),
                Cell::Number(format!("{:.2}", i.qty)),
            ]
        })
        .collect();
    let sheet2 = render_sheet(&["Item", "UoM", "Quantity"], &boq_rows)?;
    write_part(&mut zip, "xl/worksheets/sheet2.xml", &sheet2)?;

    let cursor = zip.finish().map_err(render_err)?;
    Ok(cursor.into_inner())
}

fn write_part(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    bytes: &[u8],
) -> Result<(), TakeoffError> {
    zip.start_file(name, SimpleFileOptions::default())
        .map_err(render_err)?;
    zip.write_all(bytes)?;
    Ok(())
}

fn render_workbook_part() -> Result<Vec<u8>, TakeoffError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(render_err)?;

    let mut workbook = BytesStart::new("workbook");
    workbook.push_attribute(("xmlns", MAIN_NS));
    workbook.push_attribute(("xmlns:r", REL_NS));
    writer.write_event(Event::Start(workbook)).map_err(render_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("sheets")))
        .map_err(render_err)?;

    for (idx, name) in ["Rooms", "BOQ"].iter().enumerate() {
        let mut sheet = BytesStart::new("sheet");
        sheet.push_attribute(("name", *name));
        sheet.push_attribute(("sheetId", (idx + 1).to_string().as_str()));
        sheet.push_attribute(("r:id", format!("rId{}", idx + 1).as_str()));
        writer.write_event(Event::Empty(sheet)).map_err(render_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("sheets")))
        .map_err(render_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("workbook")))
        .map_err(render_err)?;
    Ok(writer.into_inner().into_inner())
}

fn render_sheet(header: &[&str], rows: &[Vec<Cell>]) -> Result<Vec<u8>, TakeoffError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(render_err)?;

    let mut worksheet = BytesStart::new("worksheet");
    worksheet.push_attribute(("xmlns", MAIN_NS));
    writer.write_event(Event::Start(worksheet)).map_err(render_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("sheetData")))
        .map_err(render_err)?;

    let header_cells: Vec<Cell> = header.iter().map(|h| Cell::Text(h.to_string())).collect();
    write_row(&mut writer, 1, &header_cells)?;
    for (i, row) in rows.iter().enumerate() {
        write_row(&mut writer, i + 2, row)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("sheetData")))
        .map_err(render_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("worksheet")))
        .map_err(render_err)?;
    Ok(writer.into_inner().into_inner())
}

fn write_row(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    row_number: usize,
    cells: &[Cell],
) -> Result<(), TakeoffError> {
    let mut row = BytesStart::new("row");
    row.push_attribute(("r", row_number.to_string().as_str()));
    writer.write_event(Event::Start(row)).map_err(render_err)?;

    for (col, cell) in cells.iter().enumerate() {
        let cell_ref = format!("{}{}", (b'A' + col as u8) as char, row_number);
        let mut c = BytesStart::new("c");
        c.push_attribute(("r", cell_ref.as_str()));
        match cell {
            Cell::Text(s) => {
                c.push_attribute(("t", "inlineStr"));
                writer.write_event(Event::Start(c)).map_err(render_err)?;
                writer
                    .write_event(Event::Start(BytesStart::new("is")))
                    .map_err(render_err)?;
                writer
                    .write_event(Event::Start(BytesStart::new("t")))
                    .map_err(render_err)?;
                writer
                    .write_event(Event::Text(BytesText::new(s)))
                    .map_err(render_err)?;
                writer
                    .write_event(Event::End(BytesEnd::new("t")))
                    .map_err(render_err)?;
                writer
                    .write_event(Event::End(BytesEnd::new("is")))
                    .map_err(render_err)?;
            }
            Cell::Number(v) => {
                writer.write_event(Event::Start(c)).map_err(render_err)?;
                writer
                    .write_event(Event::Start(BytesStart::new("v")))
                    .map_err(render_err)?;
                writer
                    .write_event(Event::Text(BytesText::new(v)))
                    .map_err(render_err)?;
                writer
                    .write_event(Event::End(BytesEnd::new("v")))
                    .map_err(render_err)?;
            }
        }
        writer
            .write_event(Event::End(BytesEnd::new("c")))
            .map_err(render_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("row")))
        .map_err(render_err)?;
    Ok(())
}

fn render_err<E: std::fmt::Display>(e: E) -> TakeoffError {
    TakeoffError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Uom;
    use calamine::{Reader, Xlsx};

    fn open(bytes: Vec<u8>) -> Xlsx<Cursor<Vec<u8>>> {
        calamine::open_workbook_from_rs(Cursor::new(bytes)).unwrap()
    }

    fn cell_str(range: &calamine::Range<calamine::Data>, row: u32, col: u32) -> String {
        match range.get_value((row, col)).unwrap() {
            calamine::Data::String(s) => s.clone(),
            other => format!("{other}"),
        }
    }

    fn cell_f64(range: &calamine::Range<calamine::Data>, row: u32, col: u32) -> f64 {
        match range.get_value((row, col)).unwrap() {
            calamine::Data::Float(f) => *f,
            calamine::Data::Int(i) => *i as f64,
            other => panic!("expected number, got {other:?}"),
        }
    }

    #[test]
    fn test_workbook_reads_back_with_both_sheets() {
        let rooms = vec![
            RoomArea {
                room: "Kitchen".into(),
                area_m2: 10.0,
            },
            RoomArea {
                room: "Bed".into(),
                area_m2: 18.5,
            },
        ];
        let boq = vec![BoqItem {
            item: "Floor tiles - Kitchen".into(),
            uom: Uom::SquareMeters,
            qty: 10.0 * 1.03,
        }];

        let bytes = render_workbook(&rooms, &boq).unwrap();
        let mut workbook = open(bytes);
        let names = workbook.sheet_names();
        assert_eq!(names.len(), 2);
        assert_eq!(names[0], "Rooms");
        assert_eq!(names[1], "BOQ");

        let rooms_range = workbook.worksheet_range("Rooms").unwrap();
        assert_eq!(cell_str(&rooms_range, 0, 0), "Room");
        assert_eq!(cell_str(&rooms_range, 0, 1), "Area (m²)");
        assert_eq!(cell_str(&rooms_range, 1, 0), "Kitchen");
        assert_eq!(cell_f64(&rooms_range, 1, 1), 10.0);
        assert_eq!(cell_f64(&rooms_range, 2, 1), 18.5);

        let boq_range = workbook.worksheet_range("BOQ").unwrap();
        assert_eq!(cell_str(&boq_range, 0, 2), "Quantity");
        assert_eq!(cell_str(&boq_range, 1, 0), "Floor tiles - Kitchen");
        assert_eq!(cell_str(&boq_range, 1, 1), "m²");
        assert_eq!(cell_f64(&boq_range, 1, 2), 10.3);
    }

    #[test]
    fn test_empty_input_gives_header_only_sheets() {
        let bytes = render_workbook(&[], &[]).unwrap();
        let mut workbook = open(bytes);

        let rooms_range = workbook.worksheet_range("Rooms").unwrap();
        assert_eq!(rooms_range.height(), 1);
        let boq_range = workbook.worksheet_range("BOQ").unwrap();
        assert_eq!(boq_range.height(), 1);
        assert_eq!(cell_str(&boq_range, 0, 0), "Item");
    }
}
