/*!

This is the long-form manual for `topsis` (the library) and the `topsis` command.

## The method

TOPSIS ranks alternatives by how close they are to an ideal alternative, and how far
they are from the worst one. For every criterion:

1. the column is divided by its euclidean norm,
2. the normalized column is multiplied by the weight of the criterion,
3. the ideal best is the largest value of the column when the criterion is maximized
   (`+`), the smallest one when it is minimized (`-`). The ideal worst is the opposite.

Every alternative then gets a distance to the ideal best and a distance to the ideal
worst (euclidean, over all the criteria). The score is
`distance_worst / (distance_best + distance_worst)`, between 0 and 1, higher is better.
The alternative with the highest score gets rank 1.

Notes:
- the weights do not need to sum to 1,
- when two alternatives have exactly the same score, the one that comes first in the
  input gets the better rank,
- the score is rounded to 2 decimals in the output, the rank uses the unrounded score,
- a criterion whose values are all zero cannot be normalized and is reported as an error,
  as is an alternative that coincides with both ideal points (for instance when all the
  rows are identical).

## Input formats

The following formats are supported:
* `csv` Comma Separated Values (the default)
* `excel` Spreadsheets read with calamine (`.xlsx`, `.xls`, `.xlsm`, `.ods`)

When `--input-type` is not given, the format is chosen from the extension of the file.

Both formats have the same layout: a header row, then one row per alternative. The first
column is the name of the alternative, all the other columns are criteria and must only
contain numbers.

```text
Model,Price,Storage,Camera,Looks
M1,250,16,12,5
M2,200,16,8,3
M3,300,32,16,4
M4,275,32,8,4
M5,225,16,16,2
```

For spreadsheets, the first worksheet is used unless `--worksheet` names another one.

## Running

```bash
topsis data.csv "0.25,0.25,0.25,0.25" "-,+,+,+" result.csv
```

The arguments are, in order: the input file, the weights, the impacts and the output
file. There must be as many weights and impacts as criteria columns.

The output is the input table with two more columns, `Topsis Score` and `Rank`:

```text
Model,Price,Storage,Camera,Looks,Topsis Score,Rank
M1,250,16,12,5,0.53,3
M2,200,16,8,3,0.31,5
M3,300,32,16,4,0.69,1
M4,275,32,8,4,0.53,2
M5,225,16,16,2,0.4,4
```

Other options:
- `--summary <path>` writes a JSON summary with the ideal points and the distances of
  every alternative,
- `--reference <path>` compares the output with a reference CSV file. The differences
  are printed and the program fails if the two files differ,
- `--verbose` turns on debug logging. Otherwise `RUST_LOG` is honoured.

## Errors

Inputs are checked before any computation, and the first problem is reported:
the input file, weights and impacts must be present; the file must have at least 3
columns and one row; every criterion cell must be a number; the weights must be
non-negative numbers separated by commas; the impacts must be `+` or `-`; and the number
of weights, impacts and criteria must be the same.

The program prints a single `Error: ...` line and exits with a non-zero code when
something goes wrong.

 */
