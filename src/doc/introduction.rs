/*!
# Introductory Tutorial for SBASIC

Begin by opening a terminal and running the executable. If you see the
following, you have achieved success and are ready for this tutorial.
Type CTRL-D to exit SBASIC.
<pre><code>&nbsp;  SBASIC
&nbsp;  READY.
&nbsp;█
</code></pre>

Stop a running program with CTRL-C.

SBASIC is interactive. You type a statement, the computer does it, and
you are back at the prompt. A statement describes the work you want the
computer to do. Let's tell the computer to print something. For this
tutorial, I'll mark lines that you type with a "`>`". Go ahead and try
your first statement. Type in the marked line followed by ENTER.

<pre><code>&nbsp;> PRINT "HELLO WORLD"
&nbsp;  HELLO WORLD
</code></pre>

Entering a statement which executes immediately is called direct mode.
To make more interesting programs, we'll have to assemble many statements
together into a program. Next, we'll put the same statement into a program
by assigning it to a line number. To do this, simply precede the statement
with any decimal integer between 0 and 65529 inclusive.

<pre><code>&nbsp;> 10 PRINT "HELLO WORLD"
</code></pre>

Nothing happens. The statement is saved to be executed later. Let's try
a couple new statements.

<pre><code>&nbsp;> LIST
&nbsp;  10 PRINT "HELLO WORLD"
&nbsp;> RUN
&nbsp;  HELLO WORLD
</code></pre>

Now that we have a program in memory, we can add more lines or edit
existing lines. To edit a line, type the line number and press TAB. The
line will be loaded into the input buffer for you to edit. Entering a
line number by itself deletes that line. `NEW` erases the entire program.

Multiple statements fit on one line when separated by a colon. This works
in direct mode and in programs.

<pre><code>&nbsp;> A = 6 : B = 7 : PRINT A * B
&nbsp;   42
</code></pre>

SBASIC is a structured BASIC. You still have `GOTO` and line numbers for
compatibility with the classics, but programs read better with blocks.
Here is a program using a block `IF` and a `FOR` loop. Indentation is
yours to choose; SBASIC doesn't care.

```text
10 FOR I = 1 TO 5
20   IF I MOD 2 = 0 THEN
30     PRINT I; "IS EVEN"
40   ELSE
50     PRINT I; "IS ODD"
60   END IF
70 NEXT I
```

Blocks must be complete before a program will run. If you forget the
`END IF`, SBASIC tells you which line opened the block it was still
waiting for.

You can also define your own functions and subroutines. A `FUNCTION`
returns a value and is called inside an expression. A `SUB` returns
nothing and is invoked with `CALL`.

```text
10 FUNCTION AREA(R)
20   AREA = 3.14159 * R * R
30 END FUNCTION
40 PRINT AREA(2)
```

Programs are kept in files with `SAVE "NAME.BAS"` and retrieved with
`LOAD "NAME.BAS"`. `LOAD` also accepts an http or https URL, so a
program published on the web is one statement away.

That's enough to get started. The next chapter covers expressions and
types, then there's a reference for every statement and function. When
something goes wrong, SBASIC prints an error message and, for program
lines, the line number where it happened. Appendix A lists them all.

*/
